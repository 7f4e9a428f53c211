//! Closing totals printed when the timer is stopped.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub worked_secs: u64,
    pub break_secs: u64,
}

impl Summary {
    pub fn total_secs(&self) -> u64 {
        self.worked_secs.saturating_add(self.break_secs)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time worked: {}", format_hms(self.worked_secs))?;
        write!(f, "Time on break: {}", format_hms(self.break_secs))
    }
}

/// Render seconds as `H hrs M mins S secs`.
pub fn format_hms(secs: u64) -> String {
    format!(
        "{} hrs {} mins {} secs",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
