//! Comment block emission.
//!
//! Wrapped fragments are re-emitted either as a full delimited block
//! (opener, prefixed body lines, closer) or as continuation lines only,
//! joined with the document's line ending. Every emitted line has its
//! trailing whitespace stripped.

use crate::shape::is_blank;

/// Line-ending convention of the host document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n`.
    #[default]
    Lf,
    /// Windows `\r\n`.
    CrLf,
}

impl LineEnding {
    /// The literal separator sequence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Cursor position relative to the start of a replacement.
///
/// Expressed as a line offset from the first replaced line plus a column
/// from the start of that line, so the anchor survives absolute line
/// numbers shifting during the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorAnchor {
    /// Lines below the first line of the replacement.
    pub line_offset: usize,
    /// Columns from the start of the target line.
    pub column: usize,
}

/// A parsed comment block: indentation, raw body text per line, and the
/// line ending used to join emitted lines.
///
/// Transient by design; built from a document span, emitted, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Leading blanks shared by every line of the block.
    pub indentation: String,
    /// Body text with decorative prefixes already stripped.
    pub body_lines: Vec<String>,
    /// Separator used when emitting.
    pub line_ending: LineEnding,
}

impl CommentBlock {
    /// Build a block, rejecting indentation that is not blanks only.
    #[must_use]
    pub fn new(
        indentation: impl Into<String>,
        body_lines: Vec<String>,
        line_ending: LineEnding,
    ) -> Option<Self> {
        let indentation = indentation.into();
        if !is_blank(&indentation) {
            return None;
        }
        Some(Self {
            indentation,
            body_lines,
            line_ending,
        })
    }

    /// Emit as a full delimited block.
    #[must_use]
    pub fn to_block(&self) -> String {
        format_block(&self.body_lines, &self.indentation, self.line_ending)
    }

    /// Emit body lines only, without delimiters.
    #[must_use]
    pub fn to_continuation(&self) -> String {
        format_continuation(&self.body_lines, &self.indentation, self.line_ending)
    }
}

pub(crate) fn body_line(indent: &str, fragment: &str) -> String {
    let trimmed = fragment.trim_end();
    if trimmed.is_empty() {
        format!("{indent} *")
    } else {
        format!("{indent} * {trimmed}")
    }
}

/// Emit fragments as a full block: opener, body lines, closer.
#[must_use]
pub fn format_block(fragments: &[String], indent: &str, eol: LineEnding) -> String {
    let mut lines = Vec::with_capacity(fragments.len() + 2);
    lines.push(format!("{indent}/*"));
    for fragment in fragments {
        lines.push(body_line(indent, fragment));
    }
    lines.push(format!("{indent} */"));
    lines.join(eol.as_str())
}

/// Emit fragments as prefixed continuation lines only.
#[must_use]
pub fn format_continuation(fragments: &[String], indent: &str, eol: LineEnding) -> String {
    let lines: Vec<String> = fragments.iter().map(|f| body_line(indent, f)).collect();
    lines.join(eol.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_form_wraps_fragments_in_delimiters() {
        let fragments = string_vec!["first line", "second line"];
        let text = format_block(&fragments, "  ", LineEnding::Lf);
        assert_eq!(text, "  /*\n   * first line\n   * second line\n   */");
    }

    #[test]
    fn continuation_form_has_no_delimiters() {
        let fragments = string_vec!["only line"];
        let text = format_continuation(&fragments, "", LineEnding::Lf);
        assert_eq!(text, " * only line");
    }

    #[test]
    fn emission_strips_trailing_whitespace() {
        let fragments = string_vec!["padded   ", ""];
        let text = format_continuation(&fragments, "", LineEnding::Lf);
        assert_eq!(text, " * padded\n *");
    }

    #[test]
    fn crlf_join() {
        let fragments = string_vec!["a"];
        let text = format_block(&fragments, "", LineEnding::CrLf);
        assert_eq!(text, "/*\r\n * a\r\n */");
    }

    #[test]
    fn empty_fragment_list_emits_bare_delimiters() {
        let text = format_block(&[], "    ", LineEnding::Lf);
        assert_eq!(text, "    /*\n     */");
    }

    #[test]
    fn comment_block_rejects_non_blank_indentation() {
        assert!(CommentBlock::new("x ", Vec::new(), LineEnding::Lf).is_none());
        let block = CommentBlock::new(" \t", string_vec!["body"], LineEnding::Lf)
            .expect("blank indentation accepted");
        assert_eq!(block.to_continuation(), " \t * body");
    }
}
