//! This file defines the command-line interface for the swearjar
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "swearjar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect, classify and censor profanity",
    long_about = "Swearjar scans text for profanity using a YAML taxonomy of dictionary words and patterns, reports which offense categories were found, and censors matches without changing the length of the text.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to a custom rule file (YAML with `simple` and `regex` sections).
    #[arg(long = "rules", value_name = "FILE", global = true, env = "SWEARJAR_RULES", help = "Use a custom rule file instead of the bundled English rules.")]
    pub rules: Option<PathBuf>,

    /// Normalize leetspeak before matching.
    #[arg(long = "leet", global = true, help = "Map leetspeak glyphs (e.g. '@' -> 'a') to letters before matching.")]
    pub leet: bool,

    #[arg(long, short = 'q', global = true, conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `swearjar` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exits 1 if the input contains profanity, 0 otherwise.
    #[command(about = "Exit 1 if the input contains profanity, 0 otherwise.")]
    Check(InputArgs),

    /// Lists every match with its offset and category tags.
    #[command(about = "List every match with its offset and category tags.")]
    Scan(ScanCommand),

    /// Counts matches per category.
    #[command(about = "Count matches per category.")]
    Scorecard(ScorecardCommand),

    /// Prints the input with every match starred out.
    #[command(about = "Print the input with every match starred out.")]
    Censor(CensorCommand),

    /// Boundary-free check for identifiers such as usernames.
    #[command(about = "Boundary-free check for usernames and other identifiers (prone to false positives).")]
    Strict(InputArgs),

    /// Exits 1 if the input contains profanity of any of the given categories.
    #[command(about = "Exit 1 if the input contains profanity of any given category.")]
    Contains(ContainsCommand),
}

/// Where to read input from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to check directly (takes precedence over --input-file and stdin).
    #[arg(value_name = "TEXT", help = "Text to process. Reads --input-file or stdin when omitted.")]
    pub text: Option<String>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "text", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "json", help = "Print matches as JSON.")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ScorecardCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "json", help = "Print the scorecard as JSON.")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CensorCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep the first character of every censored span.
    #[arg(long = "hint", help = "Keep the first character of every censored span (e.g. 'f***').")]
    pub hint: bool,
}

#[derive(Args, Debug)]
pub struct ContainsCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Categories to look for (comma-separated).
    #[arg(long = "types", short = 't', value_delimiter = ',', required = true, help = "Categories to look for (comma-separated), e.g. sexual,insult.")]
    pub types: Vec<String>,
}
