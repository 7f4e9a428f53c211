use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use super::{Progress, Reporter};

/// Redraws one terminal line in place.
///
/// The cursor is hidden on the first report and shown again by
/// [`Reporter::finish`], or on drop if `finish` was never reached.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.out, Show, Print('\n'))?;
            self.cursor_hidden = false;
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for TerminalSink<W> {
    fn report(&mut self, progress: &Progress) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }
        queue!(
            self.out,
            Print('\r'),
            Clear(ClearType::UntilNewLine),
            Print(progress)
        )?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.show_cursor()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        let _ = self.show_cursor();
    }
}
