/// Markdown link `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const TEXT_END: u8 = b']';
    pub const TEXT_CLOSE: &'static [u8; 2] = b"](";
    pub const URL_CLOSE: u8 = b')';
}
