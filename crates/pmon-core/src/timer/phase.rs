//! Phases of the pomodoro cycle and the transition between them.
//!
//! ```text
//! Work -> ShortBreak -> Work -> ... -> Work -> LongBreak -> Work -> ...
//! ```
//!
//! There is no terminal state; the cycle runs until the process is stopped.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Human-readable name used by the reporters.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute the phase that follows `current`.
///
/// Returns the next phase together with the updated completed-cycle count.
/// Finishing a work phase counts a cycle; once `cycles_per_long_break`
/// cycles are done the next phase is a long break and the count drops back
/// to zero. Breaks leave the count alone.
pub fn next_phase(
    current: Phase,
    cycles_completed: u32,
    cycles_per_long_break: u32,
) -> (Phase, u32) {
    match current {
        Phase::Work => {
            let done = cycles_completed.saturating_add(1);
            if done >= cycles_per_long_break {
                (Phase::LongBreak, 0)
            } else {
                (Phase::ShortBreak, done)
            }
        }
        Phase::ShortBreak => (Phase::Work, cycles_completed),
        Phase::LongBreak => (Phase::Work, 0),
    }
}
