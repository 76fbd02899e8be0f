//! File helpers for rewriting source documents.

use std::{fs, path::Path};

use crate::process::{process_stream, process_stream_with_limit};

/// Rewrite a file in place with reflowed comments at the default limit.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let fixed = process_stream(&lines);
    fs::write(path, fixed.join("\n") + "\n")
}

/// Rewrite a file in place with reflowed comments at a given limit.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite_with_limit(path: &Path, column_limit: usize) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let fixed = process_stream_with_limit(&lines, column_limit);
    fs::write(path, fixed.join("\n") + "\n")
}
