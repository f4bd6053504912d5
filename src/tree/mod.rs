//! Directory tree walking logic
//!
//! Two walkers share one traversal:
//!
//! - `StreamingWalker`: streams entries to a `StreamingOutput`, used for text reports
//! - `TreeWalker`: collects the same entries into a `TreeNode`, used for JSON output
//!
//! Excluded directories are removed from each listing before the walker
//! queues them, so their contents are never read.

mod config;
mod filter;
mod json_types;
mod streaming;
mod traversal;
mod walker;

pub use config::{
    DEFAULT_EXCLUDED_DIRS, EntryOrder, UnreadablePolicy, WalkerConfig, default_excluded_dirs,
};
pub use filter::FileFilter;
pub use json_types::TreeNode;
pub use streaming::{EntryKind, StreamingOutput, StreamingWalker, TreeEntry, WalkSummary};
pub use traversal::{DirListing, ResolvedRoot, get_name, read_listing};
pub use walker::{TreeBuilder, TreeWalker};
