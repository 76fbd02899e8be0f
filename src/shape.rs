//! Line-shape classification for block comments.
//!
//! A source line is one of four shapes: an opening delimiter alone, a
//! complete single-line comment, a continuation line of an open block, or
//! anything else. Classification is the first step of every reflow
//! operation; lines that match no shape pass through untouched.

use std::sync::LazyLock;

use regex::Regex;

static OPENER_RE: LazyLock<Regex> = lazy_regex!(
    r"^([ \t]*)/\*[ \t]*$",
    "opener pattern regex should compile",
);

static SINGLE_LINE_RE: LazyLock<Regex> = lazy_regex!(
    r"^([ \t]*)/\* (.*) \*/[ \t]*$",
    "single-line pattern regex should compile",
);

static CONTINUATION_RE: LazyLock<Regex> = lazy_regex!(
    r"^([ \t]*) \*(?: (.*))?$",
    "continuation pattern regex should compile",
);

/// Shape of a single raw source line.
///
/// Borrowed segments point into the classified line, so no allocation
/// happens during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// An opening delimiter alone on its line, e.g. `    /*`.
    Opener {
        /// Leading blanks before the delimiter.
        indent: &'a str,
    },
    /// A complete one-line comment, e.g. `  /* text */`.
    SingleLine {
        /// Leading blanks before the delimiter.
        indent: &'a str,
        /// Text between the delimiters.
        body: &'a str,
    },
    /// A body line of an open block, e.g. `   * text`.
    Continuation {
        /// Blanks before the ` * ` prefix.
        indent: &'a str,
        /// Text after the prefix; empty on separator lines.
        body: &'a str,
    },
    /// Any other line; never rewritten.
    PassThrough,
}

/// Classify one raw line.
///
/// The three comment shapes require the text left of the delimiter or
/// prefix to be blanks only; a line that violates this simply fails to
/// match and is reported as [`LineShape::PassThrough`].
#[must_use]
pub fn classify(line: &str) -> LineShape<'_> {
    if let Some(cap) = SINGLE_LINE_RE.captures(line) {
        return LineShape::SingleLine {
            indent: cap.get(1).expect("single-line indent capture").as_str(),
            body: cap.get(2).expect("single-line body capture").as_str(),
        };
    }

    if let Some(cap) = OPENER_RE.captures(line) {
        return LineShape::Opener {
            indent: cap.get(1).expect("opener indent capture").as_str(),
        };
    }

    if let Some(cap) = CONTINUATION_RE.captures(line) {
        return LineShape::Continuation {
            indent: cap.get(1).expect("continuation indent capture").as_str(),
            body: cap.get(2).map_or("", |m| m.as_str()),
        };
    }

    LineShape::PassThrough
}

/// Whether `text` contains only spaces and tabs.
///
/// The empty string counts as blank.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ' || c == '\t')
}
