//! Keystroke-driven formatting decisions.
//!
//! Each content change from the host editor is checked against three
//! guards, in priority order: auto-closing a freshly typed opener,
//! promoting a single-line comment split by a newline into a block, and
//! re-wrapping a comment line that grew past the column limit. The first
//! guard that holds produces an [`Edit`]; otherwise the change is left
//! alone. Decisions are pure: the host applies the replacement and then
//! moves the cursor to the returned anchor.
//!
//! Replacements produced here never satisfy any guard themselves, so a
//! host that re-feeds its own edit notifications back in gets `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    block::{CommentBlock, CursorAnchor, LineEnding},
    shape::{LineShape, classify, is_blank},
    wrap::{DEFAULT_COLUMN_LIMIT, wrap_comment_text},
};

static OPEN_BODY_RE: LazyLock<Regex> = lazy_regex!(
    r"^([ \t]*)/\* (.*)$",
    "open body pattern regex should compile",
);

static BODY_CLOSE_RE: LazyLock<Regex> = lazy_regex!(
    r"^[ \t]*(.*) \*/[ \t]*$",
    "body close pattern regex should compile",
);

/// Formatter configuration, read fresh on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Complete `/*` with a matching ` */` as the user types.
    pub auto_close_comment: bool,
    /// Re-wrap a comment line when typing reaches the column limit.
    pub auto_line_wrapping: bool,
    /// Target maximum line width, prefix included.
    pub column_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_close_comment: true,
            auto_line_wrapping: true,
            column_limit: DEFAULT_COLUMN_LIMIT,
        }
    }
}

/// One content change reported by the host editor.
///
/// Batched events are not supported; callers pass only the first change
/// of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    /// The inserted text.
    pub text: String,
    /// Line index where the insertion starts.
    pub line: usize,
    /// Character offset where the insertion starts.
    pub character: usize,
}

/// Document state a trigger decision may inspect, captured after the
/// change was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditContext<'a> {
    /// The changed line as it now reads.
    pub current_line: &'a str,
    /// The line below it, when one exists.
    pub next_line: Option<&'a str>,
    /// Character offset of the cursor after the change.
    pub cursor_column: usize,
    /// Line-ending convention of the document.
    pub line_ending: LineEnding,
}

/// Replacement for a span of whole lines plus the cursor anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// First replaced line.
    pub start_line: usize,
    /// Last replaced line, inclusive.
    pub end_line: usize,
    /// Text replacing the span; the host splits it on the document's
    /// line ending.
    pub replacement: String,
    /// Cursor position relative to `start_line`.
    pub cursor: CursorAnchor,
}

/// Decide whether a content change warrants a reformat.
///
/// Returns `None` for every change that matches no guard; this is normal
/// control flow, not an error.
#[must_use]
pub fn evaluate(change: &ContentChange, ctx: &EditContext<'_>, config: &Config) -> Option<Edit> {
    if change.text.is_empty() {
        return None;
    }
    try_auto_close(change, ctx, config)
        .or_else(|| try_promote(change, ctx))
        .or_else(|| try_overflow_rewrap(change, ctx, config))
}

/// Close a freshly typed opener: `/*` plus trailing blanks becomes
/// `/*  */` with the cursor between the delimiters.
fn try_auto_close(change: &ContentChange, ctx: &EditContext<'_>, config: &Config) -> Option<Edit> {
    if !config.auto_close_comment || !is_blank(&change.text) {
        return None;
    }
    let line = ctx.current_line;
    if ctx.cursor_column != line.chars().count() {
        return None;
    }
    let (before, after) = line.split_once("/*")?;
    if !is_blank(before) || after != change.text {
        return None;
    }

    let replacement = format!("{}  */", line.trim_end());
    let column = replacement.chars().count() - 3;
    Some(Edit {
        start_line: change.line,
        end_line: change.line,
        replacement,
        cursor: CursorAnchor {
            line_offset: 0,
            column,
        },
    })
}

/// Promote a single-line comment split by a newline into block form.
///
/// After the break the changed line holds the opener and leading body,
/// the next line the trailing body and closer; both halves become body
/// lines of a full block.
fn try_promote(change: &ContentChange, ctx: &EditContext<'_>) -> Option<Edit> {
    if !change.text.starts_with(ctx.line_ending.as_str()) {
        return None;
    }
    let open = OPEN_BODY_RE.captures(ctx.current_line)?;
    let close = BODY_CLOSE_RE.captures(ctx.next_line?)?;

    let indent = open.get(1).expect("open body indent capture").as_str();
    let block = CommentBlock::new(
        indent,
        vec![
            open.get(2).expect("open body text capture").as_str().to_string(),
            close.get(1).expect("body close text capture").as_str().to_string(),
        ],
        ctx.line_ending,
    )?;
    Some(Edit {
        start_line: change.line,
        end_line: change.line + 1,
        cursor: CursorAnchor {
            line_offset: block.body_lines.len() + 1,
            column: 0,
        },
        replacement: block.to_block(),
    })
}

/// Re-wrap the current comment line once typing reaches the column
/// limit.
///
/// Fires when a single character lands exactly at the limit column,
/// which is the first keystroke that pushes the line past the limit.
fn try_overflow_rewrap(
    change: &ContentChange,
    ctx: &EditContext<'_>,
    config: &Config,
) -> Option<Edit> {
    if !config.auto_line_wrapping
        || change.character != config.column_limit
        || change.text.chars().count() != 1
    {
        return None;
    }

    match classify(ctx.current_line) {
        LineShape::SingleLine { indent, body } => {
            // The insertion must sit at the end of the body, right
            // before the closing delimiter.
            let body_end = ctx.current_line.trim_end().chars().count() - 3;
            if change.character + 1 != body_end {
                return None;
            }
            let fragments = wrap_comment_text(body, indent, config.column_limit);
            if fragments.is_empty() {
                return None;
            }
            let block = CommentBlock::new(indent, fragments, ctx.line_ending)?;
            Some(Edit {
                start_line: change.line,
                end_line: change.line,
                cursor: CursorAnchor {
                    line_offset: block.body_lines.len() + 1,
                    column: 0,
                },
                replacement: block.to_block(),
            })
        }
        LineShape::Continuation { indent, body }
            if ctx.cursor_column == ctx.current_line.chars().count() =>
        {
            let fragments = wrap_comment_text(body, indent, config.column_limit);
            if fragments.is_empty() {
                return None;
            }
            let block = CommentBlock::new(indent, fragments, ctx.line_ending)?;
            Some(Edit {
                start_line: change.line,
                end_line: change.line,
                cursor: CursorAnchor {
                    line_offset: block.body_lines.len(),
                    column: 0,
                },
                replacement: block.to_continuation(),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lf_context<'a>(current: &'a str, next: Option<&'a str>, cursor: usize) -> EditContext<'a> {
        EditContext {
            current_line: current,
            next_line: next,
            cursor_column: cursor,
            line_ending: LineEnding::Lf,
        }
    }

    #[test]
    fn auto_close_completes_opener() {
        let change = ContentChange {
            text: " ".to_string(),
            line: 4,
            character: 2,
        };
        let ctx = lf_context("/* ", None, 3);
        let edit = evaluate(&change, &ctx, &Config::default()).expect("auto-close fires");
        assert_eq!(edit.replacement, "/*  */");
        assert_eq!(edit.start_line, 4);
        assert_eq!(edit.end_line, 4);
        assert_eq!(
            edit.cursor,
            CursorAnchor {
                line_offset: 0,
                column: 3,
            }
        );
    }

    #[test]
    fn auto_close_respects_indentation() {
        let change = ContentChange {
            text: " ".to_string(),
            line: 0,
            character: 6,
        };
        let ctx = lf_context("    /* ", None, 7);
        let edit = evaluate(&change, &ctx, &Config::default()).expect("auto-close fires");
        assert_eq!(edit.replacement, "    /*  */");
    }

    #[test]
    fn auto_close_disabled_by_config() {
        let change = ContentChange {
            text: " ".to_string(),
            line: 0,
            character: 2,
        };
        let ctx = lf_context("/* ", None, 3);
        let config = Config {
            auto_close_comment: false,
            ..Config::default()
        };
        assert!(evaluate(&change, &ctx, &config).is_none());
    }

    #[test]
    fn auto_close_requires_cursor_at_line_end() {
        let change = ContentChange {
            text: " ".to_string(),
            line: 0,
            character: 2,
        };
        let ctx = lf_context("/* x", None, 3);
        assert!(evaluate(&change, &ctx, &Config::default()).is_none());
    }

    #[test]
    fn newline_promotes_single_line_comment() {
        let change = ContentChange {
            text: "\n".to_string(),
            line: 7,
            character: 8,
        };
        let ctx = lf_context("/* hello", Some(" world */"), 0);
        let edit = evaluate(&change, &ctx, &Config::default()).expect("promotion fires");
        assert_eq!(edit.replacement, "/*\n * hello\n * world\n */");
        assert_eq!(edit.start_line, 7);
        assert_eq!(edit.end_line, 8);
        assert_eq!(
            edit.cursor,
            CursorAnchor {
                line_offset: 3,
                column: 0,
            }
        );
    }

    #[test]
    fn promotion_keeps_indentation() {
        let change = ContentChange {
            text: "\n".to_string(),
            line: 0,
            character: 10,
        };
        let ctx = lf_context("  /* head", Some("  tail */"), 0);
        let edit = evaluate(&change, &ctx, &Config::default()).expect("promotion fires");
        assert_eq!(edit.replacement, "  /*\n   * head\n   * tail\n   */");
    }

    #[test]
    fn promotion_needs_both_halves() {
        let change = ContentChange {
            text: "\n".to_string(),
            line: 0,
            character: 8,
        };
        let ctx = lf_context("/* hello", Some("plain code"), 0);
        assert!(evaluate(&change, &ctx, &Config::default()).is_none());
    }

    #[test]
    fn overflow_expands_single_line_comment() {
        let config = Config {
            column_limit: 10,
            ..Config::default()
        };
        // Typing the "g" of "defg" at the limit column, right before
        // the closing delimiter.
        let line = "/* abc defg */";
        let change = ContentChange {
            text: "g".to_string(),
            line: 2,
            character: 10,
        };
        let ctx = lf_context(line, None, 11);
        let edit = evaluate(&change, &ctx, &config).expect("overflow rewrap fires");
        assert_eq!(edit.replacement, "/*\n * abc\n * defg\n */");
        assert_eq!(edit.start_line, 2);
        assert_eq!(edit.end_line, 2);
        assert_eq!(
            edit.cursor,
            CursorAnchor {
                line_offset: 3,
                column: 0,
            }
        );
    }

    #[test]
    fn overflow_rewraps_continuation_line() {
        let config = Config {
            column_limit: 16,
            ..Config::default()
        };
        // Typing the "m" of "gamma" at the end of a line sitting at the
        // limit pushes the word onto a fresh continuation line.
        let line = " * alpha beta gam";
        let change = ContentChange {
            text: "m".to_string(),
            line: 3,
            character: 16,
        };
        let ctx = lf_context(line, None, 17);
        let edit = evaluate(&change, &ctx, &config).expect("overflow rewrap fires");
        assert_eq!(edit.replacement, " * alpha beta\n * gam");
        assert_eq!(edit.start_line, 3);
        assert_eq!(edit.end_line, 3);
        assert_eq!(
            edit.cursor,
            CursorAnchor {
                line_offset: 2,
                column: 0,
            }
        );
    }

    #[test]
    fn overflow_requires_single_character_insert() {
        let config = Config {
            column_limit: 16,
            ..Config::default()
        };
        let change = ContentChange {
            text: "ab".to_string(),
            line: 0,
            character: 16,
        };
        let ctx = lf_context(" * alpha beta gamm", None, 18);
        assert!(evaluate(&change, &ctx, &config).is_none());
    }

    #[test]
    fn overflow_requires_insertion_at_limit() {
        let config = Config {
            column_limit: 40,
            ..Config::default()
        };
        let change = ContentChange {
            text: "m".to_string(),
            line: 0,
            character: 16,
        };
        let ctx = lf_context(" * alpha beta gam", None, 17);
        assert!(evaluate(&change, &ctx, &config).is_none());
    }

    #[test]
    fn overflow_ignored_when_disabled() {
        let config = Config {
            auto_line_wrapping: false,
            column_limit: 16,
            ..Config::default()
        };
        let change = ContentChange {
            text: "m".to_string(),
            line: 0,
            character: 16,
        };
        let ctx = lf_context(" * alpha beta gam", None, 17);
        assert!(evaluate(&change, &ctx, &config).is_none());
    }

    #[test]
    fn deletions_never_trigger() {
        let change = ContentChange {
            text: String::new(),
            line: 0,
            character: 0,
        };
        let ctx = lf_context("/* ", None, 3);
        assert!(evaluate(&change, &ctx, &Config::default()).is_none());
    }

    #[test]
    fn own_replacement_does_not_retrigger() {
        // Re-feeding a block replacement as if it were a user change must
        // match no guard.
        let change = ContentChange {
            text: "/*\n * hello\n * world\n */".to_string(),
            line: 7,
            character: 0,
        };
        let ctx = lf_context("/*", Some(" * hello"), 2);
        assert!(evaluate(&change, &ctx, &Config::default()).is_none());
    }

    #[test]
    fn crlf_promotion_uses_crlf_join() {
        let change = ContentChange {
            text: "\r\n".to_string(),
            line: 0,
            character: 8,
        };
        let ctx = EditContext {
            current_line: "/* hello",
            next_line: Some(" world */"),
            cursor_column: 0,
            line_ending: LineEnding::CrLf,
        };
        let edit = evaluate(&change, &ctx, &Config::default()).expect("promotion fires");
        assert_eq!(edit.replacement, "/*\r\n * hello\r\n * world\r\n */");
    }
}
