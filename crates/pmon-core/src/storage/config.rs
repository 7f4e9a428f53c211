//! TOML defaults file.
//!
//! Lives at `~/.config/pmon/config.toml`. Every key is optional:
//!
//! ```toml
//! [timer]
//! cycles = 4
//! work_minutes = 25
//! short_break_minutes = 5
//! long_break_minutes = 30
//! output = "/tmp/pmon"
//! ```
//!
//! Command-line flags win over the file, the file wins over built-in
//! defaults. pmon never writes this file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::error::ConfigError;
use crate::report::SinkTarget;
use crate::timer::{
    TimerConfig, DEFAULT_CYCLES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES,
    DEFAULT_WORK_MINUTES,
};

/// Timer settings that may or may not be given.
///
/// Used both for the `[timer]` table and for command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default)]
    pub cycles: Option<u32>,
    #[serde(default)]
    pub work_minutes: Option<u64>,
    #[serde(default)]
    pub short_break_minutes: Option<u64>,
    #[serde(default)]
    pub long_break_minutes: Option<u64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl TimerSection {
    /// Fill every unset value from `fallback`.
    pub fn or(self, fallback: TimerSection) -> TimerSection {
        TimerSection {
            cycles: self.cycles.or(fallback.cycles),
            work_minutes: self.work_minutes.or(fallback.work_minutes),
            short_break_minutes: self.short_break_minutes.or(fallback.short_break_minutes),
            long_break_minutes: self.long_break_minutes.or(fallback.long_break_minutes),
            output: self.output.or(fallback.output),
        }
    }

    /// Build a validated [`TimerConfig`], using built-in defaults for
    /// anything still unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero or oversized values.
    pub fn into_timer_config(self) -> Result<TimerConfig, ConfigError> {
        let config = TimerConfig::from_minutes(
            self.cycles.unwrap_or(DEFAULT_CYCLES),
            self.work_minutes.unwrap_or(DEFAULT_WORK_MINUTES),
            self.short_break_minutes.unwrap_or(DEFAULT_SHORT_BREAK_MINUTES),
            self.long_break_minutes.unwrap_or(DEFAULT_LONG_BREAK_MINUTES),
        )?;
        let sink = self.output.map(SinkTarget::File).unwrap_or_default();
        Ok(config.with_sink(sink))
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
}

impl Config {
    pub fn path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load the default file, or return defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load an explicitly named file. A missing file is an error here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoadFailed`] if the file cannot be read and
    /// [`ConfigError::ParseFailed`] if it is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Parse TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] on malformed input.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg = Config::parse("").unwrap();
        assert_eq!(cfg, Config::default());
        let timer = cfg.timer.into_timer_config().unwrap();
        assert_eq!(timer, TimerConfig::default());
    }

    #[test]
    fn partial_timer_table() {
        let cfg = Config::parse(
            r#"
            [timer]
            work_minutes = 50
            output = "/tmp/pmon-status"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.timer.work_minutes, Some(50));
        assert_eq!(cfg.timer.cycles, None);

        let timer = cfg.timer.into_timer_config().unwrap();
        assert_eq!(timer.duration_secs(Phase::Work), 3000);
        assert_eq!(timer.duration_secs(Phase::ShortBreak), 300);
        assert_eq!(
            timer.sink(),
            &SinkTarget::File(PathBuf::from("/tmp/pmon-status"))
        );
    }

    #[test]
    fn overrides_win_over_file_values() {
        let file = TimerSection {
            cycles: Some(3),
            work_minutes: Some(40),
            ..TimerSection::default()
        };
        let flags = TimerSection {
            work_minutes: Some(10),
            ..TimerSection::default()
        };
        let merged = flags.or(file);
        assert_eq!(merged.cycles, Some(3));
        assert_eq!(merged.work_minutes, Some(10));
        assert_eq!(merged.long_break_minutes, None);
    }

    #[test]
    fn zero_in_file_is_rejected() {
        let cfg = Config::parse("[timer]\ncycles = 0\n").unwrap();
        assert!(matches!(
            cfg.timer.into_timer_config(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse("[timer\nwork_minutes = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = Config::parse("[timer]\nwork_minutes = \"lots\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer]\nlong_break_minutes = 20\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.timer.long_break_minutes, Some(20));
    }
}
