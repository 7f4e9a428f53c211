use super::phase::Phase;
use crate::error::ConfigError;
use crate::report::SinkTarget;

pub const DEFAULT_CYCLES: u32 = 4;
pub const DEFAULT_WORK_MINUTES: u64 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u64 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u64 = 30;

const SECONDS_IN_MINUTE: u64 = 60;
/// Upper bound for a single phase: one year.
pub const MAX_PHASE_SECS: u64 = 365 * 24 * 60 * SECONDS_IN_MINUTE;

/// Validated timer configuration.
///
/// Immutable once the timer starts. The only way to build one is through
/// [`TimerConfig::new`] (or `Default`), so the loop never sees a zero
/// duration or a zero cycle count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    cycles: u32,
    work_secs: u64,
    short_break_secs: u64,
    long_break_secs: u64,
    sink: SinkTarget,
}

impl TimerConfig {
    /// Build a configuration from durations in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any value is zero or a
    /// duration exceeds [`MAX_PHASE_SECS`].
    pub fn new(
        cycles: u32,
        work_secs: u64,
        short_break_secs: u64,
        long_break_secs: u64,
    ) -> Result<Self, ConfigError> {
        if cycles == 0 {
            return Err(ConfigError::InvalidValue {
                key: "cycles".into(),
                message: "must be a positive integer".into(),
            });
        }
        for (key, value) in [
            ("work", work_secs),
            ("short_break", short_break_secs),
            ("long_break", long_break_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: "duration must be at least one second".into(),
                });
            }
            if value > MAX_PHASE_SECS {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("duration must not exceed {MAX_PHASE_SECS} seconds"),
                });
            }
        }
        Ok(Self {
            cycles,
            work_secs,
            short_break_secs,
            long_break_secs,
            sink: SinkTarget::Terminal,
        })
    }

    /// Same as [`TimerConfig::new`] with durations given in minutes.
    ///
    /// Uses saturating arithmetic so absurd minute counts are rejected by
    /// the range check instead of wrapping.
    pub fn from_minutes(
        cycles: u32,
        work_min: u64,
        short_break_min: u64,
        long_break_min: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(
            cycles,
            work_min.saturating_mul(SECONDS_IN_MINUTE),
            short_break_min.saturating_mul(SECONDS_IN_MINUTE),
            long_break_min.saturating_mul(SECONDS_IN_MINUTE),
        )
    }

    pub fn with_sink(mut self, sink: SinkTarget) -> Self {
        self.sink = sink;
        self
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn sink(&self) -> &SinkTarget {
        &self.sink
    }

    /// Configured length of `phase` in seconds.
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::ShortBreak => self.short_break_secs,
            Phase::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            work_secs: DEFAULT_WORK_MINUTES * SECONDS_IN_MINUTE,
            short_break_secs: DEFAULT_SHORT_BREAK_MINUTES * SECONDS_IN_MINUTE,
            long_break_secs: DEFAULT_LONG_BREAK_MINUTES * SECONDS_IN_MINUTE,
            sink: SinkTarget::Terminal,
        }
    }
}
