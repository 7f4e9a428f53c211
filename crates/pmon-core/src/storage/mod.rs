mod config;

pub use config::{Config, TimerSection};

use std::path::PathBuf;

/// Returns `~/.config/pmon/`, or `$PMON_CONFIG_DIR` when set.
///
/// The directory is only read from, never created.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("PMON_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pmon")
}
