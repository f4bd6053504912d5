//! TOML configuration file
//!
//! Values from the file sit between the built-in defaults and command-line
//! flags: the binary loads the file, applies it to a default `ReportConfig`,
//! then applies its own flags on top.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReportError, Result};
use crate::output::IndentStyle;
use crate::report::ReportConfig;
use crate::tree::{EntryOrder, UnreadablePolicy};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Replaces the default exclusion set.
    pub excluded_dirs: Option<Vec<String>>,
    /// Added to the exclusion set (after `excluded_dirs` is applied).
    #[serde(default)]
    pub extra_excluded_dirs: Vec<String>,
    pub allowed_suffixes: Option<Vec<String>>,
    pub output_path: Option<PathBuf>,
    pub order: Option<EntryOrder>,
    pub indent: Option<IndentStyle>,
    pub max_depth: Option<usize>,
    pub summary: Option<bool>,
    pub strict: Option<bool>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::parse(&text, path)
    }

    /// Overlay the values present in this file onto `config`.
    pub fn apply(&self, config: &mut ReportConfig) {
        let walker = &mut config.walker;
        if let Some(dirs) = &self.excluded_dirs {
            walker.excluded_dirs = dirs.iter().cloned().collect::<BTreeSet<_>>();
        }
        walker
            .excluded_dirs
            .extend(self.extra_excluded_dirs.iter().cloned());
        if let Some(suffixes) = &self.allowed_suffixes {
            walker.allowed_suffixes = Some(suffixes.clone());
        }
        if let Some(order) = self.order {
            walker.order = order;
        }
        if let Some(depth) = self.max_depth {
            walker.max_depth = Some(depth);
        }
        if let Some(strict) = self.strict {
            walker.on_unreadable = if strict {
                UnreadablePolicy::Abort
            } else {
                UnreadablePolicy::Skip
            };
        }

        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
        if let Some(summary) = self.summary {
            config.output.show_summary = summary;
        }
        if let Some(path) = &self.output_path {
            config.output_path = Some(path.clone());
        }
    }
}
