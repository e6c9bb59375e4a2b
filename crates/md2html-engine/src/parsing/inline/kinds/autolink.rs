/// Bare `http://` / `https://` URL.
pub struct AutoLink;

impl AutoLink {
    pub const SCHEMES: [&'static [u8]; 2] = [b"https://", b"http://"];

    /// True for bytes that end a bare URL: ASCII whitespace, `)` and `<`.
    pub fn ends_url(b: u8) -> bool {
        b.is_ascii_whitespace() || b == b')' || b == b'<'
    }
}
