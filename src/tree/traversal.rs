//! Root resolution and directory listing shared by all walkers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

use super::config::{EntryOrder, WalkerConfig};
use super::filter::FileFilter;

/// A root directory that has been checked to exist, be a directory and be listable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    path: PathBuf,
    name: String,
}

impl ResolvedRoot {
    /// Resolve `path` to an absolute canonical directory path.
    ///
    /// Fails with `InvalidRoot` when the path does not exist, is not a
    /// directory, or cannot be listed. Nothing is written anywhere on failure.
    pub fn resolve(path: &Path) -> Result<Self> {
        let invalid = |source: io::Error| ReportError::InvalidRoot {
            path: path.to_path_buf(),
            source,
        };

        let canonical = fs::canonicalize(path).map_err(invalid)?;
        let metadata = fs::metadata(&canonical).map_err(invalid)?;
        if !metadata.is_dir() {
            return Err(ReportError::not_a_directory(path));
        }
        fs::read_dir(&canonical).map_err(invalid)?;

        let name = get_name(&canonical);
        tracing::debug!(root = %canonical.display(), "resolved root");
        Ok(Self {
            path: canonical,
            name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name of the root directory, or the full path for a filesystem root.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Get the base name of a path, falling back to the full path (e.g. for `/`).
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Immediate children of one directory, already filtered and ordered.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<String>,
    /// Subdirectories left after removing excluded names.
    pub subdirs: Vec<(String, PathBuf)>,
}

/// Read a directory and split it into files and subdirectories.
///
/// Excluded subdirectories are dropped here so callers never descend into
/// them. Symlinks are reported as files and never followed.
pub fn read_listing(
    path: &Path,
    config: &WalkerConfig,
    filter: Option<&FileFilter>,
) -> io::Result<DirListing> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let is_dir = match entry.file_type() {
            Ok(t) => t.is_dir(),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "cannot stat entry");
                false
            }
        };
        entries.push((entry.file_name(), is_dir));
    }

    if config.order == EntryOrder::Name {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let mut listing = DirListing::default();
    for (file_name, is_dir) in entries {
        let name = file_name.to_string_lossy().into_owned();
        if is_dir {
            if config.is_excluded(&name) {
                tracing::debug!(dir = %path.join(&file_name).display(), "excluded");
                continue;
            }
            listing.subdirs.push((name, path.join(&file_name)));
        } else if filter.is_none_or(|f| f.is_included(&name)) {
            listing.files.push(name);
        }
    }
    Ok(listing)
}
