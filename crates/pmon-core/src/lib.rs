//! # pmon Core Library
//!
//! Business logic for the `pmon` pomodoro timer. The CLI binary is a thin
//! layer that parses flags into a [`TimerConfig`], opens a [`Sink`] and
//! hands both to a [`Timer`].
//!
//! ## Architecture
//!
//! - **Scheduler**: [`next_phase`] and [`Session::advance`] walk the fixed
//!   work / short break / long break cycle
//! - **Timer loop**: [`Timer`] counts a phase down one tick at a time
//!   against a [`Clock`], honouring pause and shutdown requests
//! - **Reporters**: terminal line or single-line status file
//! - **Summary**: worked vs. break totals printed on shutdown
//!
//! ## Key Components
//!
//! - [`Session`]: the one mutable state of a run
//! - [`Controls`]: atomic flags raised by signal handlers
//! - [`Config`]: optional TOML defaults file

pub mod controls;
pub mod error;
pub mod report;
pub mod storage;
pub mod summary;
pub mod timer;

pub use controls::Controls;
pub use error::{ConfigError, CoreError};
pub use report::{FileSink, Progress, Reporter, Sink, SinkTarget, TerminalSink};
pub use storage::{Config, TimerSection};
pub use summary::{format_hms, Summary};
pub use timer::{
    next_phase, Clock, ManualClock, Phase, PhaseOutcome, Session, SystemClock, Timer, TimerConfig,
};
