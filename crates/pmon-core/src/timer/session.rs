use super::phase::{next_phase, Phase};
use super::schedule::TimerConfig;
use crate::summary::Summary;

/// Mutable state of one pomodoro run.
///
/// There is exactly one per process. The caller owns it and lends it to
/// the scheduler ([`Session::advance`]) and the timer loop
/// ([`crate::timer::Timer::run_phase`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    cycles_completed: u32,
    worked_secs: u64,
    break_secs: u64,
    /// Seconds into the phase currently running. Folded into the totals
    /// when the phase completes.
    in_progress_secs: u64,
    paused: bool,
}

impl Session {
    /// A fresh session: work phase, no cycles done, nothing accumulated.
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            cycles_completed: 0,
            worked_secs: 0,
            break_secs: 0,
            in_progress_secs: 0,
            paused: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    pub fn worked_secs(&self) -> u64 {
        self.worked_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    pub fn in_progress_secs(&self) -> u64 {
        self.in_progress_secs
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Totals so far, counting the phase in flight toward its category.
    pub fn summary(&self) -> Summary {
        let (work_extra, break_extra) = if self.phase.is_break() {
            (0, self.in_progress_secs)
        } else {
            (self.in_progress_secs, 0)
        };
        Summary {
            worked_secs: self.worked_secs.saturating_add(work_extra),
            break_secs: self.break_secs.saturating_add(break_extra),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Move to the next phase of the cycle and return it.
    pub fn advance(&mut self, config: &TimerConfig) -> Phase {
        let (phase, cycles) = next_phase(self.phase, self.cycles_completed, config.cycles());
        self.phase = phase;
        self.cycles_completed = cycles;
        self.in_progress_secs = 0;
        phase
    }

    pub(crate) fn set_in_progress(&mut self, secs: u64) {
        self.in_progress_secs = secs;
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Fold a finished phase of `duration_secs` into the running totals.
    pub(crate) fn complete_phase(&mut self, duration_secs: u64) {
        if self.phase.is_break() {
            self.break_secs = self.break_secs.saturating_add(duration_secs);
        } else {
            self.worked_secs = self.worked_secs.saturating_add(duration_secs);
        }
        self.in_progress_secs = 0;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
