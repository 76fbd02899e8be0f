//! Whole-document comment reflow.
//!
//! Expands single-line comments that no longer fit the column limit into
//! block form, then re-wraps every continuation paragraph. Lines that are
//! not block-comment shapes pass through untouched.

use unicode_width::UnicodeWidthStr;

use crate::{
    block::body_line,
    rewrap::rewrap_lines,
    shape::{LineShape, classify},
    wrap::{DEFAULT_COLUMN_LIMIT, wrap_comment_text},
};

/// Reflow all block comments in a document to the given limit.
#[must_use]
pub fn process_stream_with_limit(lines: &[String], column_limit: usize) -> Vec<String> {
    let mut expanded = Vec::with_capacity(lines.len());

    for line in lines {
        if let LineShape::SingleLine { indent, body } = classify(line)
            && UnicodeWidthStr::width(line.trim_end()) > column_limit
        {
            let fragments = wrap_comment_text(body, indent, column_limit);
            expanded.push(format!("{indent}/*"));
            for fragment in &fragments {
                expanded.push(body_line(indent, fragment));
            }
            expanded.push(format!("{indent} */"));
            continue;
        }
        expanded.push(line.clone());
    }

    rewrap_lines(&expanded, column_limit)
}

/// Reflow all block comments to the default 80-column limit.
#[must_use]
pub fn process_stream(lines: &[String]) -> Vec<String> {
    process_stream_with_limit(lines, DEFAULT_COLUMN_LIMIT)
}
