//! Time source for the timer loop.
//!
//! The loop only ever asks for "now" and "sleep for a tick", so tests can
//! swap in [`ManualClock`] and run hours of pomodoros instantly.

use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

type SleepHook = Box<dyn FnMut(u64) + Send>;

/// Virtual clock: `sleep` advances time instantly.
///
/// An optional hook runs after every sleep with the number of sleeps so
/// far, which lets a test request a pause or a shutdown at an exact tick.
pub struct ManualClock {
    origin: Instant,
    offset: Duration,
    sleeps: u64,
    on_sleep: Option<SleepHook>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Duration::ZERO,
            sleeps: 0,
            on_sleep: None,
        }
    }

    pub fn with_hook(hook: impl FnMut(u64) + Send + 'static) -> Self {
        Self {
            on_sleep: Some(Box::new(hook)),
            ..Self::new()
        }
    }

    /// Virtual time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.offset
    }

    pub fn sleeps(&self) -> u64 {
        self.sleeps
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset
    }

    fn sleep(&mut self, duration: Duration) {
        self.offset += duration;
        self.sleeps += 1;
        if let Some(hook) = self.on_sleep.as_mut() {
            hook(self.sleeps);
        }
    }
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualClock")
            .field("offset", &self.offset)
            .field("sleeps", &self.sleeps)
            .finish_non_exhaustive()
    }
}
