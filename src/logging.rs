//! File-backed tracing setup.
//!
//! The terminal belongs to the game view, so logs never go to stdout or
//! stderr.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[cfg(unix)]
const NULL_DEVICE: &str = "/dev/null";
#[cfg(windows)]
const NULL_DEVICE: &str = "NUL";

/// Install the global subscriber. `RUST_LOG` directives override the
/// configured default level.
pub fn init(config: &Config) -> Result<()> {
    let file = match File::create(&config.log_file) {
        Ok(file) => file,
        Err(_) => File::create(NULL_DEVICE)?,
    };

    let directive: Directive = config
        .log_level
        .parse()
        .map_err(|e| anyhow!("invalid --log-level {:?}: {}", config.log_level, e))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {}", e))
}
