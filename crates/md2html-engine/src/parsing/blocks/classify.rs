use crate::parsing::lines::indent_depth;

use super::kinds::{CodeFence, Heading, ListKind, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Depths always come from the
/// untrimmed line; texts borrow from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A line that is exactly three backticks once trimmed.
    FenceDelimiter { depth: usize },
    /// `#` to `####` followed by a space.
    Header { level: u8, text: &'a str },
    /// `- text` or `1. text`.
    ListItem {
        kind: ListKind,
        depth: usize,
        text: &'a str,
    },
    /// Anything else, trimmed.
    Paragraph { text: &'a str },
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self, LineClass::Blank)
    }
}

/// Classifies individual lines for the block assembly phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, fence delimiter, header, unordered item, ordered
    /// item, paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if CodeFence::is_delimiter(trimmed) {
            return LineClass::FenceDelimiter {
                depth: indent_depth(line),
            };
        }

        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Header { level, text };
        }

        let item = ListMarker::unordered(trimmed)
            .map(|text| (ListKind::Unordered, text))
            .or_else(|| ListMarker::ordered(trimmed).map(|text| (ListKind::Ordered, text)));
        if let Some((kind, text)) = item {
            return LineClass::ListItem {
                kind,
                depth: indent_depth(line),
                text,
            };
        }

        LineClass::Paragraph { text: trimmed }
    }
}

/// Classifies `line` with the default classifier.
pub fn classify(line: &str) -> LineClass<'_> {
    MarkdownLineClassifier.classify(line)
}
