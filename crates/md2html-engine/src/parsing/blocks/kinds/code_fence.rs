use crate::{
    escape::escape,
    parsing::lines::{LineCursor, strip_indent},
};

pub struct CodeFence;

impl CodeFence {
    pub const DELIMITER: &'static str = "```";

    /// True if the trimmed line is exactly a fence delimiter.
    pub fn is_delimiter(trimmed: &str) -> bool {
        trimmed == Self::DELIMITER
    }

    /// Reads raw lines up to the closing delimiter (consumed) or end of input.
    ///
    /// The cursor must sit just past the opening delimiter. Each line loses
    /// up to `strip` columns of leading whitespace.
    pub fn read_body<'a>(cursor: &mut LineCursor<'a>, strip: usize) -> Vec<&'a str> {
        let mut lines = Vec::new();
        while let Some(line) = cursor.bump() {
            if Self::is_delimiter(line.trim()) {
                break;
            }
            lines.push(strip_indent(line, strip));
        }
        lines
    }

    /// Writes a code section holding `lines` escaped verbatim.
    ///
    /// The section is never indented: `<pre>` content must stay byte-exact.
    pub fn write_html(lines: &[&str], out: &mut String) {
        out.push_str("<section class=\"code\">\n<pre><code>");
        out.push_str(&escape(&lines.join("\n")));
        out.push_str("</code></pre>\n</section>\n");
    }
}
