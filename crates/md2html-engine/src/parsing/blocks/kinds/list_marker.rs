use std::sync::LazyLock;

use regex::Regex;

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered list marker pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// The HTML list element for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";

    /// Returns the item text after a `- ` marker.
    pub fn unordered(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::BULLET)
    }

    /// Returns the item text after a `12. ` marker.
    pub fn ordered(trimmed: &str) -> Option<&str> {
        ORDERED_MARKER.find(trimmed).map(|m| &trimmed[m.end()..])
    }
}
