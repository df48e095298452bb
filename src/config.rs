use crate::device::DEFAULT_DEVICE_PATH;
use std::time::Duration;

const DEFAULT_POLL_SECS: u64 = 1;
const DEFAULT_SETTLE_SECS: u64 = 2;

/// Runtime configuration, read from `AUTOROTATE_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input device delivering accelerometer events.
    pub device_path: String,
    /// Delay between polls.
    pub poll_interval: Duration,
    /// Delay after an apply, letting the display subsystem settle.
    pub settle_delay: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            device_path: DEFAULT_DEVICE_PATH.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            settle_delay: Duration::from_secs(DEFAULT_SETTLE_SECS),
        }
    }
}

impl Config {
    /// Read configuration from the environment. Unset or unparsable
    /// variables fall back to the defaults.
    ///
    /// - `AUTOROTATE_DEVICE`: input device path
    /// - `AUTOROTATE_POLL_SECS`: seconds between polls
    /// - `AUTOROTATE_SETTLE_SECS`: seconds to wait after an apply
    pub fn from_env() -> Config {
        Config {
            device_path: read_env_string("AUTOROTATE_DEVICE", DEFAULT_DEVICE_PATH),
            poll_interval: Duration::from_secs(read_env_u64(
                "AUTOROTATE_POLL_SECS",
                DEFAULT_POLL_SECS,
            )),
            settle_delay: Duration::from_secs(read_env_u64(
                "AUTOROTATE_SETTLE_SECS",
                DEFAULT_SETTLE_SECS,
            )),
        }
    }
}

fn read_env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn read_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
