//! Logger initialisation for the CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`, honouring `RUST_LOG` unless `level` overrides it.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}
