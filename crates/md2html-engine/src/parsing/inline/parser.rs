use crate::parsing::lines::Span;

use super::{
    cursor::Cursor,
    kinds::{AutoLink, CodeSpan, Link},
    types::InlineNode,
};

/// Which constructs a parse pass recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rules {
    /// Code spans, links and autolinks.
    Full,
    /// Code spans only (used inside link text).
    CodeOnly,
}

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the line where `s` begins (for absolute span positions)
/// - `s`: The text to parse (a header, paragraph or list item text)
///
/// # Precedence
/// Code spans first, then links, then autolinks. A code span inside link
/// text or a link URL is opaque to the link scan.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    parse(base, s, Rules::Full)
}

/// Parses only code spans; everything else is text.
pub fn parse_code_spans(base: usize, s: &str) -> Vec<InlineNode> {
    parse(base, s, Rules::CodeOnly)
}

/// What failed link scans have learned about the rest of the text.
///
/// Every scan walks the same path through code spans and starts only move
/// forward, so a failure seen from one `[` also holds for the later starts
/// it covers. Keeps link parsing linear in the length of the text.
#[derive(Debug, Default)]
struct LinkMisses {
    /// No `]` remains outside a code span.
    no_text_end: bool,
    /// No `)` remains outside a code span.
    no_url_end: bool,
    /// Every `[` before this position fails.
    dead_before: usize,
}

fn parse(base: usize, s: &str, rules: Rules) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut misses = LinkMisses::default();
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        let node = match rules {
            Rules::Full => try_parse_code_span(&mut cur)
                .or_else(|| try_parse_link(&mut cur, &mut misses))
                .or_else(|| try_parse_autolink(&mut cur, &mut misses)),
            Rules::CodeOnly => try_parse_code_span(&mut cur),
        };
        if let Some(node) = node {
            let full = node.full_span();
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// would be empty. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == CodeSpan::TICK {
            break;
        }
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::CodeSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}

/// Advances to the next `stop` byte that is not inside a code span.
///
/// Returns false if the input ends first.
fn scan_to(cur: &mut Cursor<'_>, stop: u8) -> bool {
    loop {
        match cur.peek() {
            None => return false,
            Some(b) if b == stop => return true,
            Some(CodeSpan::TICK) => {
                if try_parse_code_span(cur).is_none() {
                    cur.bump();
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// Attempts to parse a `[text](url)` link starting at the current position.
///
/// Text and URL must both be non-empty. On failure, cursor position is
/// restored and `misses` records what later starts can skip.
fn try_parse_link(cur: &mut Cursor<'_>, misses: &mut LinkMisses) -> Option<InlineNode> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let start = cur.pos();
    if misses.no_text_end || start < misses.dead_before {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let text_start = cur.pos();

    if !scan_to(cur, Link::TEXT_END) {
        misses.no_text_end = true;
        *cur = saved;
        return None;
    }
    let text_end = cur.pos();
    if text_end == text_start || !cur.starts_with(Link::TEXT_CLOSE) || misses.no_url_end {
        misses.dead_before = text_end;
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::TEXT_CLOSE.len());
    let url_start = cur.pos();

    if !scan_to(cur, Link::URL_CLOSE) {
        misses.no_url_end = true;
        *cur = saved;
        return None;
    }
    if cur.pos() == url_start {
        misses.dead_before = text_end;
        *cur = saved;
        return None;
    }
    let url_end = cur.pos();
    cur.bump(); // )

    Some(InlineNode::Link {
        full: Span {
            start,
            end: cur.pos(),
        },
        text: Span {
            start: text_start,
            end: text_end,
        },
        url: Span {
            start: url_start,
            end: url_end,
        },
    })
}

/// True if a code span or link starts at the cursor.
fn at_construct(cur: &Cursor<'_>, misses: &mut LinkMisses) -> bool {
    let mut probe = cur.clone();
    try_parse_code_span(&mut probe).is_some() || try_parse_link(&mut probe, misses).is_some()
}

/// Attempts to parse a bare URL starting at the current position.
///
/// The URL runs until whitespace, `)`, `<`, the end of input, or the start
/// of a code span or link. At least one byte must follow the scheme.
fn try_parse_autolink(cur: &mut Cursor<'_>, misses: &mut LinkMisses) -> Option<InlineNode> {
    let scheme = AutoLink::SCHEMES
        .into_iter()
        .find(|scheme| cur.starts_with(scheme))?;

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(scheme.len());
    let body_start = cur.pos();

    while let Some(b) = cur.peek() {
        if AutoLink::ends_url(b) {
            break;
        }
        if (b == CodeSpan::TICK || b == Link::OPEN) && at_construct(cur, misses) {
            break;
        }
        cur.bump();
    }

    if cur.pos() == body_start {
        *cur = saved;
        return None;
    }

    Some(InlineNode::AutoLink(Span {
        start,
        end: cur.pos(),
    }))
}
