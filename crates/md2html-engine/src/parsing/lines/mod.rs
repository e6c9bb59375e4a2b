pub mod cursor;
pub mod indent;
pub mod span;

pub use cursor::LineCursor;
pub use indent::{indent_depth, strip_indent};
pub use span::Span;
