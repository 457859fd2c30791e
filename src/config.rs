//! Command-line configuration for the terminal game.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::DEFAULT_GRAVITY_MS;

pub const USAGE: &str = "\
Usage: blockfall [OPTIONS]

Options:
  --gravity-ms <MS>      Gravity tick period in milliseconds (default 1000)
  --seed <N>             Piece sequence seed (default: from the clock)
  --log-file <PATH>      Log destination (default: <tmp>/blockfall.log)
  --log-level <FILTER>   Default log filter, RUST_LOG still applies (default info)
  -h, --help             Print this help

Keys: arrows/hjkl/wasd move, up/k/w/space rotate, r restart, q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gravity_ms: u32,
    pub seed: u32,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_ms: DEFAULT_GRAVITY_MS,
            seed: clock_seed(),
            log_file: std::env::temp_dir().join("blockfall.log"),
            log_level: String::from("info"),
        }
    }
}

/// Parse arguments (program name excluded).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<Config>> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => return Ok(None),
            "--gravity-ms" => {
                let v = value_for(args, &mut i, flag)?;
                config.gravity_ms = v
                    .parse::<u32>()
                    .ok()
                    .filter(|&ms| ms > 0)
                    .ok_or_else(|| anyhow!("invalid --gravity-ms value: {}", v))?;
            }
            "--seed" => {
                let v = value_for(args, &mut i, flag)?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--log-file" => {
                config.log_file = PathBuf::from(value_for(args, &mut i, flag)?);
            }
            "--log-level" => {
                config.log_level = value_for(args, &mut i, flag)?.to_string();
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn value_for<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
