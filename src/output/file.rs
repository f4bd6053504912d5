//! Report file sink

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{ReportError, Result};
use crate::tree::ResolvedRoot;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Buffered report file.
///
/// The buffer is flushed by `finish` on success; on any early return the
/// `BufWriter` is dropped, which flushes whatever was already written.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ReportFile {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ReportError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "created report file");
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the run timestamp and absolute root path, followed by a blank line.
    pub fn write_header(&mut self, root: &ResolvedRoot, generated_at: &DateTime<Local>) -> Result<()> {
        let header = format!(
            "Generated: {}\nRoot: {}\n\n",
            generated_at.format(TIMESTAMP_FORMAT),
            root.path().display()
        );
        self.write_str(&header)
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.io(|w| writeln!(w, "{}", line))
    }

    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.io(|w| w.write_all(text.as_bytes()))
    }

    pub fn finish(mut self) -> Result<()> {
        self.io(|w| w.flush())
    }

    fn io(&mut self, op: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>) -> Result<()> {
        op(&mut self.writer).map_err(|source| ReportError::OutputWrite {
            path: self.path.clone(),
            source,
        })
    }
}
