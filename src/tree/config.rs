//! Configuration types for tree walkers

use std::collections::BTreeSet;

use serde::Deserialize;

/// Directory names skipped when no other exclusion set is configured.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".angular",
    ".git",
    "__pycache__",
    "dist",
    "build",
    "coverage",
    "venv",
    "env",
];

/// Order in which the entries of a directory are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// Sort by file name (byte-wise), identical output across runs
    #[default]
    Name,
    /// Keep the order the filesystem enumerates entries in
    Filesystem,
}

/// What to do when a directory below the root cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Log a warning, count the directory as skipped and continue with its siblings
    #[default]
    Skip,
    /// Stop the whole run with an `UnreadableEntry` error
    Abort,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directory base names that are never descended into.
    pub excluded_dirs: BTreeSet<String>,
    /// When set, only files whose name ends with one of these suffixes are reported.
    pub allowed_suffixes: Option<Vec<String>>,
    pub order: EntryOrder,
    pub on_unreadable: UnreadablePolicy,
    pub max_depth: Option<usize>,
}

impl WalkerConfig {
    /// Config with an empty exclusion set and no file filter.
    pub fn unfiltered() -> Self {
        Self {
            excluded_dirs: BTreeSet::new(),
            ..Default::default()
        }
    }

    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_suffixes = Some(suffixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_dirs.contains(dir_name)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            allowed_suffixes: None,
            order: EntryOrder::Name,
            on_unreadable: UnreadablePolicy::Skip,
            max_depth: None,
        }
    }
}

pub fn default_excluded_dirs() -> BTreeSet<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}
