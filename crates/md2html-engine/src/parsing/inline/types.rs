use crate::parsing::lines::Span;

/// A parsed inline node with byte spans into the line.
///
/// All variants store spans rather than text; rendering slices the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a "raw zone" - no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A markdown link `[text](url)`.
    Link {
        /// Full span including brackets and parentheses.
        full: Span,
        /// Span of the link text (between `[` and `]`).
        text: Span,
        /// Span of the URL (between `(` and `)`).
        url: Span,
    },
    /// A bare `http://` or `https://` URL.
    AutoLink(Span),
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn full_span(&self) -> Span {
        match *self {
            InlineNode::Text(sp) => sp,
            InlineNode::CodeSpan { full, .. } => full,
            InlineNode::Link { full, .. } => full,
            InlineNode::AutoLink(sp) => sp,
        }
    }
}
