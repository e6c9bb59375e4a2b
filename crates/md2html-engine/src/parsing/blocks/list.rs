use std::collections::HashMap;

use crate::parsing::{inline::render_inline, lines::LineCursor};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, ListKind},
};

/// Spaces per nesting level for `<ul>`/`<ol>`.
const LEVEL_INDENT: usize = 8;
/// Extra spaces for `<li>` relative to its list.
const ITEM_INDENT: usize = 4;

/// One entry of a list run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry<'a> {
    Item {
        kind: ListKind,
        depth: usize,
        text: &'a str,
    },
    /// A fenced block nested in the preceding item. Lines are already
    /// stripped to the delimiter's depth.
    Fence(Vec<&'a str>),
}

/// A maximal run of list items, the blank lines between them and fenced
/// blocks nested inside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRun<'a> {
    pub entries: Vec<ListEntry<'a>>,
}

impl<'a> ListRun<'a> {
    /// Consumes a list run from `cursor`, which should sit on a list item.
    ///
    /// Blank lines belong to the run only when more list content follows
    /// them; trailing blanks are left for the caller. A fence delimiter
    /// continues the run when it is indented deeper than the first item.
    pub fn collect(cursor: &mut LineCursor<'a>, classifier: &MarkdownLineClassifier) -> Self {
        let mut entries = Vec::new();
        let mut root_depth = None;

        while let Some(line) = cursor.peek() {
            match classifier.classify(line) {
                LineClass::ListItem { kind, depth, text } => {
                    root_depth.get_or_insert(depth);
                    entries.push(ListEntry::Item { kind, depth, text });
                    cursor.bump();
                }
                LineClass::FenceDelimiter { depth } if nested_in(root_depth, depth) => {
                    cursor.bump();
                    let lines = CodeFence::read_body(cursor, depth);
                    entries.push(ListEntry::Fence(lines));
                }
                LineClass::Blank if resumes_after_blanks(cursor, classifier, root_depth) => {
                    while cursor.peek().is_some_and(|l| classifier.classify(l).is_blank()) {
                        cursor.bump();
                    }
                }
                _ => break,
            }
        }

        Self { entries }
    }

    /// Writes the run as nested `<ul>`/`<ol>` markup.
    ///
    /// The list type at each depth is fixed by the first marker seen at that
    /// depth within this run.
    pub fn write_html(&self, out: &mut String) {
        let mut kinds: HashMap<usize, ListKind> = HashMap::new();
        let mut levels = LevelStack::default();

        for (i, entry) in self.entries.iter().enumerate() {
            let next = self.entries.get(i + 1);
            match entry {
                ListEntry::Item { kind, depth, text } => {
                    let kind = *kinds.entry(*depth).or_insert(*kind);
                    levels.place(*depth, kind, out);
                    let keep_open = levels.top_depth().is_some_and(|d| opens_nested(next, d));
                    levels.write_item(text, keep_open, out);
                }
                ListEntry::Fence(lines) => {
                    CodeFence::write_html(lines, out);
                    if !levels.top_depth().is_some_and(|d| opens_nested(next, d)) {
                        levels.close_item(out);
                    }
                }
            }
        }

        while !levels.is_empty() {
            levels.close_level(out);
        }
    }
}

fn nested_in(root_depth: Option<usize>, depth: usize) -> bool {
    root_depth.is_some_and(|root| depth > root)
}

/// Looks past the blank lines at the cursor for more list content.
fn resumes_after_blanks(
    cursor: &LineCursor<'_>,
    classifier: &MarkdownLineClassifier,
    root_depth: Option<usize>,
) -> bool {
    let mut n = 0;
    while let Some(line) = cursor.peek_nth(n) {
        match classifier.classify(line) {
            LineClass::Blank => n += 1,
            LineClass::ListItem { .. } => return true,
            LineClass::FenceDelimiter { depth } => return nested_in(root_depth, depth),
            _ => return false,
        }
    }
    false
}

/// True if `next` belongs inside an item whose level sits at `depth`.
fn opens_nested(next: Option<&ListEntry<'_>>, depth: usize) -> bool {
    match next {
        Some(ListEntry::Fence(_)) => true,
        Some(ListEntry::Item { depth: d, .. }) => *d > depth,
        None => false,
    }
}

#[derive(Debug)]
struct ListLevel {
    depth: usize,
    kind: ListKind,
    /// An `<li>` at this level is open and holds nested content.
    item_open: bool,
}

#[derive(Debug, Default)]
struct LevelStack {
    levels: Vec<ListLevel>,
}

impl LevelStack {
    fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn top_depth(&self) -> Option<usize> {
        self.levels.last().map(|l| l.depth)
    }

    /// Makes the level for an item at `depth` the top of the stack.
    ///
    /// Deeper opens a new list inside the open `<li>`. Equal or shallower
    /// closes deeper levels and the item they were nested in. A depth with no
    /// exact match joins the level it lands on; the root level is never
    /// popped here.
    fn place(&mut self, depth: usize, kind: ListKind, out: &mut String) {
        match self.top_depth() {
            Some(top) if depth > top => self.open_level(depth, kind, out),
            Some(_) => {
                while self.levels.len() > 1 && self.top_depth().is_some_and(|d| d > depth) {
                    self.close_level(out);
                }
                self.close_item(out);
            }
            None => self.open_level(depth, kind, out),
        }
    }

    fn open_level(&mut self, depth: usize, kind: ListKind, out: &mut String) {
        push_indent(out, self.levels.len() * LEVEL_INDENT);
        out.push('<');
        out.push_str(kind.tag());
        out.push_str(">\n");
        self.levels.push(ListLevel {
            depth,
            kind,
            item_open: false,
        });
    }

    fn write_item(&mut self, text: &str, keep_open: bool, out: &mut String) {
        let Some(level) = self.levels.len().checked_sub(1) else {
            return;
        };
        push_indent(out, level * LEVEL_INDENT + ITEM_INDENT);
        out.push_str("<li>");
        out.push_str(&render_inline(text));
        if keep_open {
            out.push('\n');
            self.levels[level].item_open = true;
        } else {
            out.push_str("</li>\n");
        }
    }

    fn close_item(&mut self, out: &mut String) {
        let level = self.levels.len().saturating_sub(1);
        if let Some(top) = self.levels.last_mut()
            && top.item_open
        {
            push_indent(out, level * LEVEL_INDENT + ITEM_INDENT);
            out.push_str("</li>\n");
            top.item_open = false;
        }
    }

    fn close_level(&mut self, out: &mut String) {
        self.close_item(out);
        if let Some(level) = self.levels.pop() {
            push_indent(out, self.levels.len() * LEVEL_INDENT);
            out.push_str("</");
            out.push_str(level.kind.tag());
            out.push_str(">\n");
        }
    }
}

fn push_indent(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}
