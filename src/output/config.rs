//! Output configuration types

use serde::Deserialize;

/// Indentation drawn once per depth level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Four spaces
    #[default]
    Spaces,
    /// Vertical guide followed by three spaces (`│   `)
    Guides,
}

impl IndentStyle {
    pub fn unit(self) -> &'static str {
        match self {
            IndentStyle::Spaces => "    ",
            IndentStyle::Guides => "│   ",
        }
    }

    pub fn prefix(self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Color directory names on the console. Never applies to the report file.
    pub use_color: bool,
    pub indent: IndentStyle,
    /// Append a `N directories, M files` line after the tree.
    pub show_summary: bool,
}
