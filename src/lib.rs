//! Library for reflowing `/* ... */` block comments.
//!
//! The crate splits the work into two pure stages. Line-shape
//! classification ([`shape`]) recognises opening delimiters, single-line
//! comments, and continuation lines; the reflow engine ([`wrap`],
//! [`block`], [`rewrap`]) re-flows comment body text to a column limit at
//! word boundaries and re-emits properly delimited, properly indented
//! lines. On top of those sit the keystroke trigger decisions an editor
//! integration calls per content change ([`trigger`]) and a
//! whole-document pipeline used by the command-line binary ([`process`],
//! [`io`]).
//!
//! Nothing here touches a document directly: every entry point maps input
//! text to replacement text (or to `None` when no edit applies), and the
//! caller owns applying the result.

#[macro_use]
mod macros;
#[macro_use]
mod test_utils;

pub mod block;
pub mod io;
pub mod process;
pub mod rewrap;
pub mod shape;
pub mod trigger;
pub mod wrap;

pub use block::{CommentBlock, CursorAnchor, LineEnding, format_block, format_continuation};
pub use io::{rewrite, rewrite_with_limit};
pub use process::{process_stream, process_stream_with_limit};
pub use rewrap::{Segment, aggregate, rewrap_lines, rewrap_selection};
pub use shape::{LineShape, classify, is_blank};
pub use trigger::{Config, ContentChange, Edit, EditContext, evaluate};
pub use wrap::{DEFAULT_COLUMN_LIMIT, PREFIX_WIDTH, effective_width, wrap_comment_text};
