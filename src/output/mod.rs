//! Report formatting and sinks
//!
//! - `config` - Output configuration types
//! - `streaming` - Text formatter writing to the console and the report file
//! - `file` - Buffered report file with run header
//! - `json` - JSON document rendering

mod config;
mod file;
mod json;
mod streaming;

pub use config::{IndentStyle, OutputConfig};
pub use file::{ReportFile, TIMESTAMP_FORMAT};
pub use json::{JsonReport, render_json};
pub use streaming::{StreamingFormatter, format_line};
