use std::borrow::Cow;

/// Escapes the five HTML-sensitive characters: `&`, `<`, `>`, `"` and `'`.
///
/// Quotes become `&quot;` and `&#39;`. Escaping is applied once only:
/// feeding already escaped text back in escapes its ampersands again.
pub fn escape(text: &str) -> Cow<'_, str> {
    // `&`, `<` and `>` first; the entities produced contain no quotes.
    let encoded = html_escape::encode_text(text);
    if !encoded.contains(['"', '\'']) {
        return encoded;
    }

    let mut out = String::with_capacity(encoded.len() + 8);
    for c in encoded.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
