/// Byte cursor over one inline text.
///
/// Positions are absolute within the enclosing line: `base` is where the
/// text starts, so spans produced from different slices of the same line
/// can be sliced out of that line directly.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    base: usize,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            bytes: s.as_bytes(),
            base,
            i: 0,
        }
    }

    /// Absolute byte position.
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.bytes.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.i).copied()
    }

    fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.i..).unwrap_or_default()
    }

    /// True if the unread input begins with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Skips `n` bytes. Callers only skip what `starts_with` has matched.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.bytes.len());
    }
}
