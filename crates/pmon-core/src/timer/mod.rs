mod clock;
mod engine;
mod phase;
mod schedule;
mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{PhaseOutcome, Timer, TICK};
pub use phase::{next_phase, Phase};
pub use schedule::{
    TimerConfig, DEFAULT_CYCLES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES,
    DEFAULT_WORK_MINUTES, MAX_PHASE_SECS,
};
pub use session::Session;
