//! Flags shared between signal handlers and the timer loop.
//!
//! Handlers only ever store `true` into an atomic. The loop reads the flags
//! at tick boundaries and does the actual work (pausing, summarising) on
//! its own thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;

use crate::error::{CoreError, Result};

/// Exit status used when a second stop signal arrives while shutdown is
/// already pending.
pub const FORCED_EXIT_STATUS: i32 = 1;

#[derive(Debug, Clone, Default)]
pub struct Controls {
    shutdown: Arc<AtomicBool>,
    pause_toggle: Arc<AtomicBool>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT/SIGTERM to shutdown and SIGUSR1 to the pause toggle.
    ///
    /// A repeated SIGINT/SIGTERM after shutdown was requested exits the
    /// process immediately with [`FORCED_EXIT_STATUS`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Signal`] if a handler cannot be registered.
    pub fn install_signal_handlers(&self) -> Result<()> {
        for signal in [SIGINT, SIGTERM] {
            // Order matters: the conditional exit must see the flag before
            // this delivery sets it.
            flag::register_conditional_shutdown(signal, FORCED_EXIT_STATUS, self.shutdown.clone())
                .map_err(CoreError::Signal)?;
            flag::register(signal, self.shutdown.clone()).map_err(CoreError::Signal)?;
        }
        #[cfg(unix)]
        flag::register(signal_hook::consts::SIGUSR1, self.pause_toggle.clone())
            .map_err(CoreError::Signal)?;
        tracing::debug!("signal handlers installed");
        Ok(())
    }

    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn request_pause_toggle(&self) {
        self.pause_toggle.store(true, Ordering::SeqCst);
    }

    /// Consume a pending pause toggle, if any.
    ///
    /// Several toggles arriving within one tick collapse into one.
    pub(crate) fn take_pause_toggle(&self) -> bool {
        self.pause_toggle.swap(false, Ordering::SeqCst)
    }
}
