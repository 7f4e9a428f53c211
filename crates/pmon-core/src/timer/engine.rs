//! The timer loop.
//!
//! Runs one phase at a time against a [`Clock`], reporting once per tick.
//! The loop is the only thing that mutates the [`Session`]; signal
//! handlers just raise flags in [`Controls`] that are looked at between
//! ticks.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = Session::new();
//! let mut timer = Timer::new(config, sink, SystemClock, controls);
//! timer.run(&mut session)?; // returns once shutdown is requested
//! timer.finish()?;
//! println!("{}", session.summary());
//! ```

use std::time::{Duration, Instant};

use super::clock::Clock;
use super::schedule::TimerConfig;
use super::session::Session;
use crate::controls::Controls;
use crate::error::Result;
use crate::report::{Progress, Reporter};

/// Length of one tick. Reported time may lag wall-clock time by up to this.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase ran its full duration and was folded into the totals.
    Completed,
    /// Shutdown was requested; the elapsed part stays in flight.
    Interrupted,
}

pub struct Timer<R: Reporter, C: Clock> {
    config: TimerConfig,
    reporter: R,
    clock: C,
    controls: Controls,
}

impl<R: Reporter, C: Clock> Timer<R, C> {
    pub fn new(config: TimerConfig, reporter: R, clock: C, controls: Controls) -> Self {
        Self {
            config,
            reporter,
            clock,
            controls,
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Cycle through phases until shutdown is requested.
    ///
    /// # Errors
    ///
    /// Propagates reporter I/O failures.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        loop {
            match self.run_phase(session)? {
                PhaseOutcome::Completed => {
                    let next = session.advance(&self.config);
                    tracing::debug!(
                        phase = %next,
                        cycles_completed = session.cycles_completed(),
                        "advanced"
                    );
                }
                PhaseOutcome::Interrupted => return Ok(()),
            }
        }
    }

    /// Drive the session's current phase to completion or shutdown.
    ///
    /// # Errors
    ///
    /// Propagates reporter I/O failures.
    pub fn run_phase(&mut self, session: &mut Session) -> Result<PhaseOutcome> {
        let phase = session.phase();
        let total_secs = self.config.duration_secs(phase);
        let mut expiry = self.clock.now() + Duration::from_secs(total_secs);
        let mut paused_since: Option<Instant> = None;
        session.set_in_progress(0);
        tracing::info!(%phase, duration_secs = total_secs, "phase started");

        loop {
            if self.controls.shutdown_requested() {
                // Count up to the stop instant, even if it lands on expiry.
                let reference = paused_since.unwrap_or_else(|| self.clock.now());
                let remaining_secs =
                    ceil_secs(expiry.saturating_duration_since(reference)).min(total_secs);
                session.set_in_progress(total_secs - remaining_secs);
                tracing::info!(
                    %phase,
                    elapsed_secs = session.in_progress_secs(),
                    "shutdown requested"
                );
                return Ok(PhaseOutcome::Interrupted);
            }

            let now = self.clock.now();
            if self.controls.take_pause_toggle() {
                match paused_since.take() {
                    Some(since) => {
                        let suspended = now.saturating_duration_since(since);
                        expiry += suspended;
                        session.set_paused(false);
                        tracing::info!(%phase, suspended_secs = suspended.as_secs(), "resumed");
                    }
                    None => {
                        paused_since = Some(now);
                        session.set_paused(true);
                        tracing::info!(%phase, "paused");
                    }
                }
            }

            // While suspended the countdown is frozen at the pause instant.
            let reference = paused_since.unwrap_or(now);
            if paused_since.is_none() && now >= expiry {
                break;
            }
            let remaining_secs =
                ceil_secs(expiry.saturating_duration_since(reference)).min(total_secs);
            session.set_in_progress(total_secs - remaining_secs);

            self.reporter.report(&Progress {
                phase,
                remaining_secs,
                total_secs,
                paused: session.is_paused(),
            })?;
            self.clock.sleep(TICK);
        }

        session.complete_phase(total_secs);
        tracing::info!(%phase, "phase completed");
        Ok(PhaseOutcome::Completed)
    }

    /// Release the reporter. Consumes the timer so this happens once.
    ///
    /// # Errors
    ///
    /// Returns the reporter's I/O error, if any.
    pub fn finish(mut self) -> Result<R> {
        self.reporter.finish()?;
        Ok(self.reporter)
    }
}

/// Whole seconds, rounding any fraction up so a fresh 25 minute phase reads
/// `25:00` rather than `24:59`.
fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
