//! The `censor` command.

use anyhow::Result;
use log::{debug, info};
use std::io::{self, Write};

use swearjar_core::Engine;

pub fn run_censor(engine: &Engine, text: &str, hint: bool) -> Result<()> {
    info!("Starting censor operation.");
    let censored = engine.censor(text, hint);
    debug!(
        "Content censored. Codepoints in: {}, out: {}",
        text.chars().count(),
        censored.chars().count()
    );

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write!(writer, "{}", censored)?;
    if !censored.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}
