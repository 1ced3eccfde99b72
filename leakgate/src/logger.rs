// leakgate/src/logger.rs
//! Logger initialization for the CLI.
//!
//! Builds on `env_logger`: without an explicit level the `RUST_LOG`
//! environment variable is honored, falling back to `warn`. The `-q`
//! and `-d` flags pass an explicit level that overrides both.

use env_logger::Env;
use log::LevelFilter;

pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    // try_init: tests may initialize the logger more than once.
    let _ = builder.format_timestamp(None).try_init();
}
