//! Runtime configuration from environment variables.
//!
//! - `DMQH_SEED`: u32 seed for the deterministic spawn RNG (default: OS-seeded)
//! - `DMQH_LOG_PATH`: write logs to this file (default: logging disabled)
//! - `DMQH_TICK_MS`: input poll interval in milliseconds (default: 16)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = get("DMQH_SEED")
            .map(|v| {
                v.parse::<u32>()
                    .with_context(|| format!("DMQH_SEED must be a u32, got {v:?}"))
            })
            .transpose()?;

        let tick_ms = match get("DMQH_TICK_MS") {
            Some(v) => {
                let ms = v
                    .parse::<u64>()
                    .with_context(|| format!("DMQH_TICK_MS must be a whole number, got {v:?}"))?;
                if ms == 0 {
                    bail!("DMQH_TICK_MS must be greater than zero");
                }
                ms
            }
            None => DEFAULT_TICK_MS,
        };

        Ok(Self {
            seed,
            log_path: get("DMQH_LOG_PATH").map(PathBuf::from),
            tick_ms,
        })
    }
}
