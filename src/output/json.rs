//! JSON output formatting

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::tree::{TreeNode, WalkSummary};

use super::file::TIMESTAMP_FORMAT;

/// Top-level JSON document: run metadata followed by the tree.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub root: &'a Path,
    pub summary: &'a WalkSummary,
    pub tree: &'a TreeNode,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        generated_at: &DateTime<Local>,
        root: &'a Path,
        summary: &'a WalkSummary,
        tree: &'a TreeNode,
    ) -> Self {
        Self {
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            root,
            summary,
            tree,
        }
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &JsonReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
