use super::error::TemplateError;

/// Action delimiters of the template language.
pub struct Action;

impl Action {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    /// `{{- ` trims whitespace before the action, ` -}}` after it.
    pub const TRIM: char = '-';
    pub const COMMENT_OPEN: &'static str = "/*";
    pub const COMMENT_CLOSE: &'static str = "*/";
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, copied to the output as is.
    Text(String),
    /// A `{{ .Name }}` reference, resolved at render time.
    Field { name: String, line: usize },
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Bytes taken by a trim marker and its one whitespace character.
const TRIM_MARKER_LEN: usize = 2;

/// True if `s` starts with a trim marker: `-` followed by whitespace.
fn starts_with_trim(s: &str) -> bool {
    s.strip_prefix(Action::TRIM)
        .is_some_and(|rest| rest.starts_with(is_space))
}

/// True if `s` starts with whitespace followed by `-}}`.
fn starts_with_trim_close(s: &str) -> bool {
    s.strip_prefix(is_space)
        .and_then(|rest| rest.strip_prefix(Action::TRIM))
        .is_some_and(|rest| rest.starts_with(Action::CLOSE))
}

/// Splits a trailing ` -` trim marker off the inside of an action.
fn split_trailing_trim(inner: &str) -> (&str, bool) {
    match inner.strip_suffix(Action::TRIM) {
        Some(rest) if rest.ends_with(is_space) => (rest, true),
        _ => (inner, false),
    }
}

/// Parses `src` into template nodes.
///
/// `name` only appears in error messages. Field names are not checked here;
/// an unknown field is an execution error.
pub fn parse_nodes(name: &str, src: &str) -> Result<Vec<Node>, TemplateError> {
    let mut nodes = Vec::new();
    let mut pos = 0;
    let mut trim_next = false;

    while let Some(found) = src[pos..].find(Action::OPEN) {
        let open = pos + found;
        let line = line_at(src, open);
        let mut inner_start = open + Action::OPEN.len();
        // A comment starts right after `{{` or after `{{- `.
        let mut comment_at = 0;

        let mut text = &src[pos..open];
        if trim_next {
            text = text.trim_start_matches(is_space);
        }
        if starts_with_trim(&src[inner_start..]) {
            text = text.trim_end_matches(is_space);
            inner_start += Action::TRIM.len_utf8();
            comment_at = TRIM_MARKER_LEN - Action::TRIM.len_utf8();
        }
        push_text(&mut nodes, text);

        let body = &src[inner_start..];
        let (consumed, trim_after) = if body[comment_at..].starts_with(Action::COMMENT_OPEN) {
            let (used, trim_after) = skip_comment(name, line, &body[comment_at..])?;
            (comment_at + used, trim_after)
        } else {
            let field = read_action(name, line, body)?;
            nodes.push(Node::Field {
                name: field.name.to_string(),
                line,
            });
            (field.consumed, field.trim_after)
        };

        pos = inner_start + consumed;
        trim_next = trim_after;
    }

    let mut tail = &src[pos..];
    if trim_next {
        tail = tail.trim_start_matches(is_space);
    }
    push_text(&mut nodes, tail);
    Ok(nodes)
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
}

/// 1-based line number of byte offset `at`.
fn line_at(src: &str, at: usize) -> usize {
    1 + src[..at].bytes().filter(|&b| b == b'\n').count()
}

struct FieldAction<'a> {
    name: &'a str,
    /// Bytes of `body` used, including the closing delimiter.
    consumed: usize,
    trim_after: bool,
}

/// Reads `.Name }}` from the text just after an opening delimiter.
fn read_action<'a>(
    name: &str,
    line: usize,
    body: &'a str,
) -> Result<FieldAction<'a>, TemplateError> {
    let Some(close) = body.find(Action::CLOSE) else {
        return Err(TemplateError::parse(name, line, "unclosed action"));
    };
    let (inner, trim_after) = split_trailing_trim(&body[..close]);
    let inner = inner.trim_matches(is_space);

    if inner.is_empty() {
        return Err(TemplateError::parse(name, line, "missing value for command"));
    }
    let field = inner
        .strip_prefix('.')
        .filter(|f| is_identifier(f))
        .ok_or_else(|| {
            TemplateError::parse(name, line, format!("unsupported action {inner:?}"))
        })?;

    Ok(FieldAction {
        name: field,
        consumed: close + Action::CLOSE.len(),
        trim_after,
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Skips `/* ... */}}` and returns the bytes consumed plus the trim flag.
///
/// `body` starts at the `/*`. The comment must end right at the closing
/// delimiter, or at ` -}}`.
fn skip_comment(name: &str, line: usize, body: &str) -> Result<(usize, bool), TemplateError> {
    let start = Action::COMMENT_OPEN.len();
    let Some(end) = body[start..].find(Action::COMMENT_CLOSE) else {
        return Err(TemplateError::parse(name, line, "unclosed comment"));
    };
    let after = start + end + Action::COMMENT_CLOSE.len();
    let rest = &body[after..];

    if rest.starts_with(Action::CLOSE) {
        Ok((after + Action::CLOSE.len(), false))
    } else if starts_with_trim_close(rest) {
        Ok((after + TRIM_MARKER_LEN + Action::CLOSE.len(), true))
    } else {
        Err(TemplateError::parse(
            name,
            line,
            "comment ends before closing delimiter",
        ))
    }
}
