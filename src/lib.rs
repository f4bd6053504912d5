//! dirmap - print a directory tree, skipping build and dependency folders

pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::FileConfig;
pub use error::{ReportError, Result};
pub use output::{IndentStyle, OutputConfig, ReportFile, StreamingFormatter};
pub use report::{ReportConfig, ReportFormat, run_report};
pub use tree::{
    DEFAULT_EXCLUDED_DIRS, EntryOrder, FileFilter, ResolvedRoot, StreamingOutput,
    StreamingWalker, TreeNode, TreeWalker, UnreadablePolicy, WalkSummary, WalkerConfig,
};
