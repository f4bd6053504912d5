//! File filtering for tree walking

/// Suffix allow-list for file names.
///
/// A file passes when its name ends with one of the suffixes. Matching is
/// case-sensitive; an empty list lets no file through.
#[derive(Debug, Clone)]
pub struct FileFilter {
    suffixes: Vec<String>,
}

impl FileFilter {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Build a filter from an optional allow-list. `None` means every file is included.
    pub fn from_config(suffixes: Option<&[String]>) -> Option<Self> {
        suffixes.map(|s| Self::new(s.to_vec()))
    }

    /// Check if a file name should be included.
    pub fn is_included(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}
