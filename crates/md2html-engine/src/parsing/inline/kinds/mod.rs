//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `OPEN = b'['`, `TEXT_CLOSE = b"]("`, `URL_CLOSE = b')'`
//! - **`AutoLink`**: `SCHEMES` and the bytes that end a bare URL
//!
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod autolink;
pub mod code_span;
pub mod link;

pub use autolink::AutoLink;
pub use code_span::CodeSpan;
pub use link::Link;
