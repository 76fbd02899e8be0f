//! Paragraph aggregation and selection rewrapping.
//!
//! A span of lines is folded into a tagged list of segments: maximal runs
//! of non-blank continuation lines become [`Segment::Paragraph`] elements,
//! and everything else (blank separator lines, delimiter lines, unrelated
//! code) becomes [`Segment::Literal`] and passes through verbatim. Each
//! paragraph then re-wraps independently against its own indentation.

use crate::{
    block::{LineEnding, body_line},
    shape::{LineShape, classify},
    wrap::wrap_comment_text,
};

/// One element of an aggregated line span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A maximal run of non-blank continuation lines sharing one
    /// indentation.
    Paragraph {
        /// Blanks before the ` * ` prefix.
        indentation: String,
        /// Raw body text of each line in the run.
        lines: Vec<String>,
    },
    /// A line reproduced unchanged.
    Literal(String),
}

/// Fold raw lines into paragraphs and literals.
#[must_use]
pub fn aggregate(lines: &[String]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for line in lines {
        let shape = classify(line);
        if let LineShape::Continuation { indent, body } = shape
            && !body.trim().is_empty()
        {
            if let Some(Segment::Paragraph { indentation, lines }) = segments.last_mut()
                && indentation.as_str() == indent
            {
                lines.push(body.to_string());
                continue;
            }
            segments.push(Segment::Paragraph {
                indentation: indent.to_string(),
                lines: vec![body.to_string()],
            });
            continue;
        }

        segments.push(Segment::Literal(line.clone()));
    }

    segments
}

fn rewrap_segments(segments: Vec<Segment>, column_limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(line) => out.push(line),
            Segment::Paragraph { indentation, lines } => {
                let text = lines.join(" ");
                for fragment in wrap_comment_text(&text, &indentation, column_limit) {
                    out.push(body_line(&indentation, &fragment));
                }
            }
        }
    }
    out
}

/// Re-wrap every continuation paragraph in `lines`, leaving all other
/// lines untouched.
#[must_use]
pub fn rewrap_lines(lines: &[String], column_limit: usize) -> Vec<String> {
    rewrap_segments(aggregate(lines), column_limit)
}

/// Re-wrap a selection span, returning the replacement text.
///
/// Returns `None` when the span contains no continuation paragraph, so
/// the caller makes no edit.
#[must_use]
pub fn rewrap_selection(text: &str, eol: LineEnding, column_limit: usize) -> Option<String> {
    let lines: Vec<String> = text.split(eol.as_str()).map(ToString::to_string).collect();
    let segments = aggregate(&lines);
    if !segments
        .iter()
        .any(|s| matches!(s, Segment::Paragraph { .. }))
    {
        return None;
    }
    Some(rewrap_segments(segments, column_limit).join(eol.as_str()))
}
