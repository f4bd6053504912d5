//! StreamingWalker - streams entries to an output without building the tree in memory

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ReportError, Result};

use super::config::{UnreadablePolicy, WalkerConfig};
use super::filter::FileFilter;
use super::traversal::{ResolvedRoot, read_listing};

/// Kind of a reported entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One line of the report, handed to a `StreamingOutput` in pre-order.
#[derive(Debug, Clone, Copy)]
pub struct TreeEntry<'a> {
    pub name: &'a str,
    pub path: &'a Path,
    /// Path components below the root (0 for the root itself).
    pub depth: usize,
    pub kind: EntryKind,
}

impl TreeEntry<'_> {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Directories reported, including the root.
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents could not be read.
    pub skipped: usize,
}

/// Receives entries as they are discovered.
pub trait StreamingOutput {
    fn output_entry(&mut self, entry: &TreeEntry<'_>) -> Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> Result<()>;
}

/// Depth-first, pre-order tree walker driven by an explicit work-list.
///
/// For every directory it emits the directory itself, then its files, then
/// walks its non-excluded subdirectories. Memory use is proportional to the
/// number of pending subdirectories, and deep trees cannot overflow the stack.
pub struct StreamingWalker {
    config: WalkerConfig,
    filter: Option<FileFilter>,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = FileFilter::from_config(config.allowed_suffixes.as_deref());
        Self { config, filter }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Resolve `root` and walk it. Fails before producing any output if the root is invalid.
    pub fn walk_path<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let root = ResolvedRoot::resolve(root)?;
        self.walk_streaming(&root, output)
    }

    /// Walk an already resolved root, streaming entries to `output`.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &ResolvedRoot,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut stack: Vec<(String, PathBuf, usize)> =
            vec![(root.name().to_string(), root.path().to_path_buf(), 0)];

        while let Some((name, path, depth)) = stack.pop() {
            output.output_entry(&TreeEntry {
                name: &name,
                path: &path,
                depth,
                kind: EntryKind::Dir,
            })?;
            summary.directories += 1;

            if self.at_max_depth(depth) {
                continue;
            }

            let listing = match read_listing(&path, &self.config, self.filter.as_ref()) {
                Ok(listing) => listing,
                Err(source) => match self.config.on_unreadable {
                    UnreadablePolicy::Skip => {
                        tracing::warn!(
                            dir = %path.display(),
                            error = %source,
                            "skipping unreadable directory"
                        );
                        summary.skipped += 1;
                        continue;
                    }
                    UnreadablePolicy::Abort => {
                        return Err(ReportError::UnreadableEntry { path, source });
                    }
                },
            };

            for file in &listing.files {
                output.output_entry(&TreeEntry {
                    name: file,
                    path: &path.join(file),
                    depth: depth + 1,
                    kind: EntryKind::File,
                })?;
                summary.files += 1;
            }

            // Reversed so the first subdirectory is popped first.
            for (sub_name, sub_path) in listing.subdirs.into_iter().rev() {
                stack.push((sub_name, sub_path, depth + 1));
            }
        }

        output.finish(&summary)?;
        Ok(summary)
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    /// Records entries as `(depth, name, is_dir)`.
    #[derive(Default)]
    struct Recorder {
        entries: Vec<(usize, String, bool)>,
        finished: Option<WalkSummary>,
    }

    impl StreamingOutput for Recorder {
        fn output_entry(&mut self, entry: &TreeEntry<'_>) -> Result<()> {
            self.entries
                .push((entry.depth, entry.name.to_string(), entry.is_dir()));
            Ok(())
        }

        fn finish(&mut self, summary: &WalkSummary) -> Result<()> {
            self.finished = Some(*summary);
            Ok(())
        }
    }

    fn walk(tree: &TestTree, config: WalkerConfig) -> (Recorder, WalkSummary) {
        let mut rec = Recorder::default();
        let summary = StreamingWalker::new(config)
            .walk_path(tree.path(), &mut rec)
            .unwrap();
        (rec, summary)
    }

    fn names(rec: &Recorder) -> Vec<&str> {
        rec.entries.iter().skip(1).map(|(_, n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_preorder_files_before_subdirs() {
        let tree = TestTree::new();
        tree.add_file("README.md", "");
        tree.add_file("src/main.py", "");
        tree.add_file("src/util/helpers.py", "");
        tree.add_file("zeta.txt", "");

        let (rec, summary) = walk(&tree, WalkerConfig::unfiltered());
        assert_eq!(
            names(&rec),
            vec!["README.md", "zeta.txt", "src", "main.py", "util", "helpers.py"]
        );
        let depths: Vec<_> = rec.entries.iter().map(|(d, _, _)| *d).collect();
        assert_eq!(depths, vec![0, 1, 1, 1, 2, 2, 3]);
        assert_eq!(summary.directories, 3);
        assert_eq!(summary.files, 4);
        assert_eq!(rec.finished, Some(summary));
    }

    #[test]
    fn test_excluded_subtree_never_visited() {
        let tree = TestTree::new();
        tree.add_file("README.md", "");
        tree.add_file("src/main.py", "");
        tree.add_file("node_modules/pkg.json", "");
        tree.add_file("node_modules/inner/deep.js", "");

        let config = WalkerConfig::unfiltered().with_excluded(["node_modules"]);
        let (rec, summary) = walk(&tree, config);
        assert_eq!(names(&rec), vec!["README.md", "src", "main.py"]);
        assert_eq!(summary.directories, 2);
        assert_eq!(summary.files, 2);
    }

    #[test]
    fn test_nested_excluded_name_is_skipped_at_every_level() {
        let tree = TestTree::new();
        tree.add_file("app/build/out.o", "");
        tree.add_file("app/src/lib.rs", "");

        let config = WalkerConfig::unfiltered().with_excluded(["build"]);
        let (rec, _) = walk(&tree, config);
        assert_eq!(names(&rec), vec!["app", "src", "lib.rs"]);
    }

    #[test]
    fn test_empty_root_emits_one_line() {
        let tree = TestTree::new();
        let (rec, summary) = walk(&tree, WalkerConfig::default());
        assert_eq!(rec.entries.len(), 1);
        assert!(rec.entries[0].2);
        assert_eq!(
            summary,
            WalkSummary {
                directories: 1,
                files: 0,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_root_is_never_excluded() {
        let tree = TestTree::new();
        tree.add_file("build/out.txt", "");
        let config = WalkerConfig::unfiltered().with_excluded(["build"]);
        let mut rec = Recorder::default();
        StreamingWalker::new(config)
            .walk_path(&tree.path().join("build"), &mut rec)
            .unwrap();
        assert_eq!(rec.entries[0].1, "build");
        assert_eq!(rec.entries[1].1, "out.txt");
    }

    #[test]
    fn test_suffix_filter_only_affects_files() {
        let tree = TestTree::new();
        tree.add_file("docs/guide.md", "");
        tree.add_file("docs/diagram.png", "");
        tree.add_file("main.rs", "");

        let config = WalkerConfig::unfiltered().with_suffixes([".md"]);
        let (rec, summary) = walk(&tree, config);
        assert_eq!(names(&rec), vec!["docs", "guide.md"]);
        assert_eq!(summary.directories, 2);
        assert_eq!(summary.files, 1);
    }

    #[test]
    fn test_max_depth_zero_lists_only_root() {
        let tree = TestTree::new();
        tree.add_file("a/b.txt", "");
        tree.add_file("c.txt", "");
        let config = WalkerConfig {
            max_depth: Some(0),
            ..WalkerConfig::unfiltered()
        };
        let (rec, _) = walk(&tree, config);
        assert_eq!(rec.entries.len(), 1);
    }

    #[test]
    fn test_max_depth_lists_dirs_without_contents() {
        let tree = TestTree::new();
        tree.add_file("top.rs", "");
        tree.add_file("level1/mid.rs", "");
        tree.add_file("level1/level2/deep.rs", "");
        let config = WalkerConfig {
            max_depth: Some(1),
            ..WalkerConfig::unfiltered()
        };
        let (rec, _) = walk(&tree, config);
        assert_eq!(names(&rec), vec!["top.rs", "level1"]);
    }

    #[test]
    fn test_missing_root_produces_no_entries() {
        let mut rec = Recorder::default();
        let err = StreamingWalker::new(WalkerConfig::default())
            .walk_path(Path::new("/does/not/exist"), &mut rec)
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidRoot { .. }));
        assert!(rec.entries.is_empty());
        assert!(rec.finished.is_none());
    }

    #[test]
    fn test_walk_is_repeatable() {
        let tree = TestTree::new();
        tree.add_file("b/x.txt", "");
        tree.add_file("a/y.txt", "");
        tree.add_file("c.txt", "");
        let (first, _) = walk(&tree, WalkerConfig::unfiltered());
        let (second, _) = walk(&tree, WalkerConfig::unfiltered());
        assert_eq!(first.entries, second.entries);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_policies() {
        use std::os::unix::fs::PermissionsExt;

        let tree = TestTree::new();
        tree.add_file("locked/secret.txt", "");
        tree.add_file("open/visible.txt", "");
        let locked = tree.path().join("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can still read the directory; nothing to test then.
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let (rec, summary) = walk(&tree, WalkerConfig::unfiltered());
        assert_eq!(names(&rec), vec!["locked", "open", "visible.txt"]);
        assert_eq!(summary.skipped, 1);

        let config = WalkerConfig {
            on_unreadable: UnreadablePolicy::Abort,
            ..WalkerConfig::unfiltered()
        };
        let mut rec = Recorder::default();
        let err = StreamingWalker::new(config)
            .walk_path(tree.path(), &mut rec)
            .unwrap_err();
        assert!(matches!(err, ReportError::UnreadableEntry { .. }));

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
