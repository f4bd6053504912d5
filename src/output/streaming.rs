//! Streaming text formatter
//!
//! Writes one line per entry to the console and, when configured, the same
//! line to the report file.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::{ReportError, Result};
use crate::tree::{StreamingOutput, TreeEntry, WalkSummary};

use super::config::{IndentStyle, OutputConfig};
use super::file::ReportFile;

/// Format an entry as plain text, without a trailing newline.
pub fn format_line(indent: IndentStyle, entry: &TreeEntry<'_>) -> String {
    let prefix = indent.prefix(entry.depth);
    if entry.is_dir() {
        format!("{}{}/", prefix, entry.name)
    } else {
        format!("{}{}", prefix, entry.name)
    }
}

/// Formatter that tees every report line to the console and an optional file.
pub struct StreamingFormatter<'w, W: WriteColor> {
    config: OutputConfig,
    console: &'w mut W,
    file: Option<ReportFile>,
}

impl<'w, W: WriteColor> StreamingFormatter<'w, W> {
    pub fn new(config: OutputConfig, console: &'w mut W) -> Self {
        Self {
            config,
            console,
            file: None,
        }
    }

    pub fn with_file(mut self, file: ReportFile) -> Self {
        self.file = Some(file);
        self
    }

    fn write_console(&mut self, entry: &TreeEntry<'_>) -> io::Result<()> {
        write!(self.console, "{}", self.config.indent.prefix(entry.depth))?;
        if entry.is_dir() {
            if self.config.use_color {
                self.console
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            write!(self.console, "{}/", entry.name)?;
            if self.config.use_color {
                self.console.reset()?;
            }
        } else {
            write!(self.console, "{}", entry.name)?;
        }
        writeln!(self.console)
    }

    fn summary_line(summary: &WalkSummary) -> String {
        let mut line = format!(
            "{} directories, {} files",
            summary.directories, summary.files
        );
        if summary.skipped > 0 {
            line.push_str(&format!(", {} skipped", summary.skipped));
        }
        line
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<'_, W> {
    fn output_entry(&mut self, entry: &TreeEntry<'_>) -> Result<()> {
        self.write_console(entry).map_err(ReportError::ConsoleWrite)?;
        let indent = self.config.indent;
        if let Some(file) = self.file.as_mut() {
            file.write_line(&format_line(indent, entry))?;
        }
        Ok(())
    }

    fn finish(&mut self, summary: &WalkSummary) -> Result<()> {
        if self.config.show_summary {
            let line = Self::summary_line(summary);
            writeln!(self.console)
                .and_then(|_| writeln!(self.console, "{}", line))
                .map_err(ReportError::ConsoleWrite)?;
            if let Some(file) = self.file.as_mut() {
                file.write_line("")?;
                file.write_line(&line)?;
            }
        }
        self.console.flush().map_err(ReportError::ConsoleWrite)?;
        if let Some(file) = self.file.take() {
            file.finish()?;
        }
        Ok(())
    }
}
