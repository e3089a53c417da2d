//! Command implementations for the swearjar CLI.

pub mod censor;
pub mod report;

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use swearjar_core::{Engine, EngineOptions, RuleSet};

use crate::cli::{Cli, Commands, InputArgs};

/// Exit status when nothing was found.
pub const EXIT_CLEAN: u8 = 0;
/// Exit status when profanity was found.
pub const EXIT_FOUND: u8 = 1;

/// Builds the engine from the CLI flags and dispatches to the subcommand.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let engine = build_engine(&cli)?;

    match cli.command {
        Commands::Check(input) => {
            let text = read_input(&input)?;
            Ok(found_status(report::run_check(&engine, &text)))
        }
        Commands::Strict(input) => {
            let text = read_input(&input)?;
            Ok(found_status(report::run_strict(&engine, &text)))
        }
        Commands::Contains(cmd) => {
            let text = read_input(&cmd.input)?;
            Ok(found_status(report::run_contains(&engine, &text, &cmd.types)))
        }
        Commands::Scan(cmd) => {
            let text = read_input(&cmd.input)?;
            report::run_scan(&engine, &text, cmd.json)?;
            Ok(ExitCode::from(EXIT_CLEAN))
        }
        Commands::Scorecard(cmd) => {
            let text = read_input(&cmd.input)?;
            report::run_scorecard(&engine, &text, cmd.json)?;
            Ok(ExitCode::from(EXIT_CLEAN))
        }
        Commands::Censor(cmd) => {
            let text = read_input(&cmd.input)?;
            censor::run_censor(&engine, &text, cmd.hint)?;
            Ok(ExitCode::from(EXIT_CLEAN))
        }
    }
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    let rules = match &cli.rules {
        Some(path) => RuleSet::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => RuleSet::load_default().context("Failed to load bundled rules")?,
    };
    info!(
        "Rules ready: {} dictionary words, {} patterns.",
        rules.simple_len(),
        rules.patterns().len()
    );
    let options = EngineOptions {
        leet_detection: cli.leet,
    };
    Ok(Engine::with_options(rules, options))
}

/// Reads the positional text, the input file, or stdin, in that order.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    let content = match &input.input_file {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };
    Ok(content)
}

fn found_status(found: bool) -> ExitCode {
    ExitCode::from(if found { EXIT_FOUND } else { EXIT_CLEAN })
}
