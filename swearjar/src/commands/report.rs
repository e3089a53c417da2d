//! Read-only reporting commands: check, strict, contains, scan, scorecard.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io::{self, Write};

use swearjar_core::Engine;

use crate::ui::output_format;

pub fn run_check(engine: &Engine, text: &str) -> bool {
    let profane = engine.profane(text);
    debug!("check: profane = {}", profane);
    profane
}

pub fn run_strict(engine: &Engine, text: &str) -> bool {
    // Identifiers are typically passed with a trailing newline from pipes.
    let profane = engine.scan_strict(text.trim());
    debug!("strict: profane = {}", profane);
    profane
}

pub fn run_contains(engine: &Engine, text: &str, types: &[String]) -> bool {
    let contains = engine.contains_type(text, types);
    debug!("contains {:?}: {}", types, contains);
    contains
}

pub fn run_scan(engine: &Engine, text: &str, json: bool) -> Result<()> {
    let matches = engine.matches(text);
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut writer, &matches).context("Failed to serialize matches")?;
        writeln!(writer)?;
    } else {
        output_format::print_matches(&mut writer, &matches, supports_color)?;
    }
    Ok(())
}

pub fn run_scorecard(engine: &Engine, text: &str, json: bool) -> Result<()> {
    let scorecard = engine.scorecard(text);
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if json {
        serde_json::to_writer(&mut writer, &scorecard).context("Failed to serialize scorecard")?;
        writeln!(writer)?;
    } else {
        output_format::print_scorecard(&mut writer, &scorecard, supports_color)?;
    }
    Ok(())
}
