//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones, run over the text of
//! one header, paragraph or list item.
//!
//! ## Architecture
//!
//! Parsing and rendering are separate. The parser produces a list of
//! [`InlineNode`]s, each carrying byte spans into the line; the renderer
//! walks that list once, escaping text nodes and writing pre-rendered
//! fragments for code spans and links. Nothing is substituted into the
//! source text, so no marker can collide with literal input and every piece
//! of text is escaped exactly once.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link, AutoLink)
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, Link, AutoLink)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`render`**: `render_inline()` turning nodes into HTML
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[a](b)` `` is a single CodeSpan, and a
//! code span inside link text or a URL never terminates the link. Links take
//! precedence over autolinks.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::{parse_code_spans, parse_inline};
pub use render::render_inline;
pub use types::InlineNode;
