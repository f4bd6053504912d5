//! TreeWalker - builds the full tree in memory for JSON output

use std::path::Path;

use crate::error::Result;

use super::config::WalkerConfig;
use super::json_types::TreeNode;
use super::streaming::{StreamingOutput, StreamingWalker, TreeEntry, WalkSummary};
use super::traversal::ResolvedRoot;

/// Tree walker that collects every entry into a `TreeNode`.
/// Uses the same traversal as `StreamingWalker`, so filtering and ordering are identical.
pub struct TreeWalker {
    inner: StreamingWalker,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            inner: StreamingWalker::new(config),
        }
    }

    pub fn walk(&self, root: &Path) -> Result<(TreeNode, WalkSummary)> {
        let root = ResolvedRoot::resolve(root)?;
        self.walk_resolved(&root)
    }

    pub fn walk_resolved(&self, root: &ResolvedRoot) -> Result<(TreeNode, WalkSummary)> {
        let mut builder = TreeBuilder::default();
        let summary = self.inner.walk_streaming(root, &mut builder)?;
        let tree = builder.into_tree().unwrap_or_else(|| TreeNode::Dir {
            name: root.name().to_string(),
            path: root.path().to_path_buf(),
            children: Vec::new(),
        });
        Ok((tree, summary))
    }
}

/// Assembles pre-order entries back into a nested tree.
///
/// `open` holds the chain of directories from the root to the most recent
/// one; its length always equals the depth of the next child.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<TreeNode>,
}

impl TreeBuilder {
    /// Close directories until the stack is `depth` long.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth.max(1) {
            if let Some(done) = self.open.pop() {
                self.push_child(done);
            }
        }
    }

    fn push_child(&mut self, node: TreeNode) {
        if let Some(TreeNode::Dir { children, .. }) = self.open.last_mut() {
            children.push(node);
        }
    }

    pub fn into_tree(mut self) -> Option<TreeNode> {
        self.close_to(1);
        self.open.pop()
    }
}

impl StreamingOutput for TreeBuilder {
    fn output_entry(&mut self, entry: &TreeEntry<'_>) -> Result<()> {
        let name = entry.name.to_string();
        let path = entry.path.to_path_buf();
        if entry.is_dir() {
            if entry.depth == 0 {
                self.open.clear();
            } else {
                self.close_to(entry.depth);
            }
            self.open.push(TreeNode::Dir {
                name,
                path,
                children: Vec::new(),
            });
        } else {
            self.close_to(entry.depth);
            self.push_child(TreeNode::File { name, path });
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &WalkSummary) -> Result<()> {
        Ok(())
    }
}
