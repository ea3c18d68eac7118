//! Logger setup
//!
//! Diagnostics go to stderr through `env_logger`. `RUST_LOG` takes priority
//! over the verbosity flag.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_ascii_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
