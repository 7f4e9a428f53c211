//! Progress output.
//!
//! Every tick the timer hands a [`Progress`] to a [`Reporter`]. Two sinks
//! exist: an in-place terminal line and a single-line status file that bars
//! like waybar or polybar can poll.

mod file;
mod terminal;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::error::Result;
use crate::timer::Phase;

pub use file::FileSink;
pub use terminal::TerminalSink;

/// Where progress goes. Chosen once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SinkTarget {
    #[default]
    Terminal,
    File(PathBuf),
}

/// One tick's worth of state for the reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub phase: Phase,
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub paused: bool,
}

impl Progress {
    /// Configured phase length in whole minutes, rounded up.
    pub fn total_minutes(&self) -> u64 {
        self.total_secs.div_ceil(60)
    }
}

/// `Work: [24:59/25]`, `Short Break (PAUSED): [03:10/5]`
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phase.label())?;
        if self.paused {
            f.write_str(" (PAUSED)")?;
        }
        write!(
            f,
            ": [{:02}:{:02}/{}]",
            self.remaining_secs / 60,
            self.remaining_secs % 60,
            self.total_minutes()
        )
    }
}

pub trait Reporter {
    fn report(&mut self, progress: &Progress) -> io::Result<()>;

    /// Release the output when the timer stops.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collects every report; handy for inspecting what the loop emitted.
impl Reporter for Vec<Progress> {
    fn report(&mut self, progress: &Progress) -> io::Result<()> {
        self.push(*progress);
        Ok(())
    }
}

/// The sink picked from a [`SinkTarget`].
#[derive(Debug)]
pub enum Sink {
    Terminal(TerminalSink<io::Stdout>),
    File(FileSink),
}

impl Sink {
    /// Open the sink for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::OutputOpen`] if the status file cannot
    /// be created.
    pub fn open(target: &SinkTarget) -> Result<Self> {
        match target {
            SinkTarget::Terminal => Ok(Sink::Terminal(TerminalSink::new(io::stdout()))),
            SinkTarget::File(path) => Ok(Sink::File(FileSink::create(path)?)),
        }
    }
}

impl Reporter for Sink {
    fn report(&mut self, progress: &Progress) -> io::Result<()> {
        match self {
            Sink::Terminal(sink) => sink.report(progress),
            Sink::File(sink) => sink.report(progress),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        match self {
            Sink::Terminal(sink) => sink.finish(),
            Sink::File(sink) => sink.finish(),
        }
    }
}
