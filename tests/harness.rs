//! Test harness for dirmap integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use dirmap::test_utils::TestTree;

pub fn run_dirmap(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_dirmap");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("FORCE_COLOR")
        .output()
        .expect("Failed to run dirmap");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Lines of a report with their indentation stripped.
pub fn entry_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|l| l.trim_start().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
