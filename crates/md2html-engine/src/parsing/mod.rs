//! # Markdown Parsing
//!
//! Line-oriented conversion of markdown into an HTML body.
//!
//! - **`lines`**: `Span`, line splitting, indentation depth and the `LineCursor`
//! - **`blocks`**: line classification and the block assembler state machine
//! - **`inline`**: code spans, links and autolinks within a single line

pub mod blocks;
pub mod inline;
pub mod lines;

use blocks::BlockAssembler;
use lines::LineCursor;

/// Renders `markdown` into an HTML body fragment.
///
/// Total over all input: unterminated fences and lists are closed at the end
/// of the input, anything unrecognised becomes a paragraph.
pub fn render_body(markdown: &str) -> String {
    BlockAssembler::new(LineCursor::new(markdown)).finish()
}

#[cfg(test)]
mod tests;
