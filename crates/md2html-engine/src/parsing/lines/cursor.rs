/// A cursor over the immutable line sequence of one document.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Splitting (rather
/// than `str::lines`) keeps a final empty line, so `"a\n"` is two lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        let lines = src
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, pos: 0 }
    }

    /// Returns true once every line has been consumed.
    pub fn eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Peeks at the current line without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.peek_nth(0)
    }

    /// Peeks `n` lines past the current one.
    pub fn peek_nth(&self, n: usize) -> Option<&'a str> {
        self.lines.get(self.pos + n).copied()
    }

    /// Advances by one line, returning the consumed line.
    pub fn bump(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }
}
