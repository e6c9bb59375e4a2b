use crate::escape::escape;

use super::{
    parser::{parse_code_spans, parse_inline},
    types::InlineNode,
};

/// Renders one line of inline markdown to HTML.
///
/// Text outside constructs is escaped. Code span content is escaped and
/// wrapped in `<code>`. Link URLs are escaped into `href`; link text may hold
/// code spans but not nested links or autolinks.
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    write_nodes(text, &parse_inline(0, text), &mut out);
    out
}

fn write_nodes(line: &str, nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match *node {
            InlineNode::Text(sp) => out.push_str(&escape(sp.text(line))),
            InlineNode::CodeSpan { inner, .. } => {
                out.push_str("<code>");
                out.push_str(&escape(inner.text(line)));
                out.push_str("</code>");
            }
            InlineNode::Link { text, url, .. } => {
                out.push_str("<a href=\"");
                out.push_str(&escape(url.text(line)));
                out.push_str("\">");
                let label = parse_code_spans(text.start, text.text(line));
                write_nodes(line, &label, out);
                out.push_str("</a>");
            }
            InlineNode::AutoLink(sp) => {
                let url = escape(sp.text(line));
                out.push_str("<a href=\"");
                out.push_str(&url);
                out.push_str("\">");
                out.push_str(&url);
                out.push_str("</a>");
            }
        }
    }
}
