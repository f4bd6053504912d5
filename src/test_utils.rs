//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Base name of the canonical root path, as reports print it.
    pub fn root_name(&self) -> String {
        let canonical = fs::canonicalize(self.dir.path()).expect("Failed to canonicalize");
        canonical
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy()
            .into_owned()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a synthetic project: `width` directories per level, `depth`
    /// levels deep, `files` files in each directory, plus a
    /// `node_modules` directory at the top.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        fn fill(base: &Path, width: usize, depth: usize, files: usize) {
            for f in 0..files {
                fs::write(base.join(format!("file_{}.rs", f)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                let sub = base.join(format!("dir_{}", d));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1, files);
            }
        }

        fill(self.dir.path(), width, depth, files);
        self.add_file("node_modules/pkg/index.js", "");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
