use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{Progress, Reporter};
use crate::error::{CoreError, Result};

/// Keeps exactly one line in a status file.
///
/// Each report rewrites the file from the start and truncates it to the
/// new length, so a poller never sees leftovers from a longer line and never
/// sees an empty file mid-run.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Create (or truncate) the status file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OutputOpen`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| CoreError::OutputOpen {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "status file opened");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for FileSink {
    fn report(&mut self, progress: &Progress) -> io::Result<()> {
        let line = format!("{progress}\n");
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(line.as_bytes())?;
        self.file.set_len(line.len() as u64)?;
        self.file.flush()
    }

    /// Empty the file so status bars stop showing a countdown.
    fn finish(&mut self) -> io::Result<()> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.flush()
    }
}
