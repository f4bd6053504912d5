//! Single entry point tying root resolution, sinks and traversal together

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use termcolor::WriteColor;

use crate::error::{ReportError, Result};
use crate::output::{JsonReport, OutputConfig, ReportFile, StreamingFormatter, render_json};
use crate::tree::{ResolvedRoot, StreamingWalker, TreeWalker, WalkSummary, WalkerConfig};

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One indented line per entry
    #[default]
    Text,
    /// A single JSON document containing the whole tree
    Json,
}

/// Everything needed for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub root: PathBuf,
    pub walker: WalkerConfig,
    pub output: OutputConfig,
    /// When set, the report is also written to this file.
    pub output_path: Option<PathBuf>,
    pub format: ReportFormat,
}

impl ReportConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            walker: WalkerConfig::default(),
            output: OutputConfig::default(),
            output_path: None,
            format: ReportFormat::Text,
        }
    }
}

/// Walk `config.root` and write the report to `console` and the optional file.
///
/// The root is validated before the report file is created, so an invalid
/// root produces no output anywhere.
pub fn run_report<W: WriteColor>(config: &ReportConfig, console: &mut W) -> Result<WalkSummary> {
    let root = ResolvedRoot::resolve(&config.root)?;
    let generated_at = Local::now();
    let file = config
        .output_path
        .as_deref()
        .map(ReportFile::create)
        .transpose()?;

    let summary = match config.format {
        ReportFormat::Text => {
            let mut formatter = StreamingFormatter::new(config.output.clone(), console);
            if let Some(mut file) = file {
                file.write_header(&root, &generated_at)?;
                formatter = formatter.with_file(file);
            }
            StreamingWalker::new(config.walker.clone()).walk_streaming(&root, &mut formatter)?
        }
        ReportFormat::Json => {
            let (tree, summary) = TreeWalker::new(config.walker.clone()).walk_resolved(&root)?;
            let json = render_json(&JsonReport::new(
                &generated_at,
                root.path(),
                &summary,
                &tree,
            ))?;
            writeln!(console, "{}", json)
                .and_then(|_| console.flush())
                .map_err(ReportError::ConsoleWrite)?;
            if let Some(mut file) = file {
                file.write_line(&json)?;
                file.finish()?;
            }
            summary
        }
    };

    tracing::info!(
        root = %root.path().display(),
        directories = summary.directories,
        files = summary.files,
        skipped = summary.skipped,
        "report complete"
    );
    Ok(summary)
}
