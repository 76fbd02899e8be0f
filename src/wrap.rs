//! Greedy word-boundary wrapping for comment body text.
//!
//! Width calculations rely on `UnicodeWidthStr::width` from the
//! `unicode-width` crate so that wrap decisions track display columns.

use unicode_width::UnicodeWidthStr;

/// Display width of the decorative prefix on every emitted line
/// (`"/* "` on an opener, `" * "` on a continuation).
pub const PREFIX_WIDTH: usize = 3;

/// Column limit applied when the caller does not configure one.
pub const DEFAULT_COLUMN_LIMIT: usize = 80;

/// Columns available for body text once indentation and the comment
/// prefix are accounted for.
#[must_use]
pub fn effective_width(indent: &str, column_limit: usize) -> usize {
    column_limit.saturating_sub(UnicodeWidthStr::width(indent) + PREFIX_WIDTH)
}

/// Wrap comment body text into fragments that fit the column limit.
///
/// Fragments are packed greedily at word boundaries: each line takes as
/// many words as fit within the effective width, separated by single
/// spaces. A word wider than the effective width is emitted whole on its
/// own line and exceeds the limit; words are never split. When the
/// effective width is zero the whole text comes back as one fragment.
///
/// Wrapping is deterministic in `(text, indent, column_limit)` alone, so
/// re-wrapping the space-joined output of a previous call reproduces it.
#[must_use]
pub fn wrap_comment_text(text: &str, indent: &str, column_limit: usize) -> Vec<String> {
    let width = effective_width(indent, column_limit);
    if width == 0 {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![trimmed.to_string()];
    }

    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            fragments.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    fragments
}
