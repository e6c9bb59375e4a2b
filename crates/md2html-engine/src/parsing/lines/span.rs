/// A byte range `[start, end)` into a single line of text.
///
/// Inline nodes store spans rather than copied text; slicing the line with
/// any node span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `s` with this span.
    pub fn text(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
