// swearjar/src/main.rs
//! Swearjar entry point.

use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use swearjar::cli::Cli;
use swearjar::commands;
use swearjar::logger;
use swearjar::ui::output_format;

/// Exit status for usage, I/O and rule-loading failures.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            let stderr_supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut io::stderr(),
                &format!("{:#}", e),
                stderr_supports_color,
            );
            ExitCode::from(EXIT_ERROR)
        }
    }
}
