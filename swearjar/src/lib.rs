// swearjar/src/lib.rs
//! # Swearjar CLI Application
//!
//! Thin command-line front end over `swearjar-core`. All matching logic lives
//! in the core crate; this crate only parses arguments, reads input, and
//! formats results.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
