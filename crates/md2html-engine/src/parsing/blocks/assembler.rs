use crate::parsing::{inline::render_inline, lines::LineCursor};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::CodeFence,
    list::ListRun,
};

/// Walks a document line by line and writes its HTML body.
///
/// Scanning is the resting state. A fence delimiter switches to reading raw
/// fence content, a list item hands the cursor to [`ListRun`] until the run
/// ends. Headers and paragraphs render on the spot, one output line each, and
/// each run of blank lines becomes a single empty output line.
pub struct BlockAssembler<'a> {
    cursor: LineCursor<'a>,
    classifier: MarkdownLineClassifier,
    out: String,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(cursor: LineCursor<'a>) -> Self {
        Self {
            cursor,
            classifier: MarkdownLineClassifier,
            out: String::new(),
        }
    }

    /// Consumes every remaining line and returns the HTML.
    pub fn finish(mut self) -> String {
        while let Some(line) = self.cursor.peek() {
            self.step(line);
        }
        self.out
    }

    fn step(&mut self, line: &'a str) {
        match self.classifier.classify(line) {
            LineClass::Blank => self.skip_blank_run(),
            LineClass::FenceDelimiter { .. } => {
                self.cursor.bump();
                let lines = CodeFence::read_body(&mut self.cursor, 0);
                CodeFence::write_html(&lines, &mut self.out);
            }
            LineClass::ListItem { .. } => {
                ListRun::collect(&mut self.cursor, &self.classifier).write_html(&mut self.out);
            }
            LineClass::Header { level, text } => {
                self.cursor.bump();
                self.write_line(&format!("h{level}"), text);
            }
            LineClass::Paragraph { text } => {
                self.cursor.bump();
                self.write_line("p", text);
            }
        }
    }

    fn skip_blank_run(&mut self) {
        while self
            .cursor
            .peek()
            .is_some_and(|l| self.classifier.classify(l).is_blank())
        {
            self.cursor.bump();
        }
        self.out.push('\n');
    }

    fn write_line(&mut self, tag: &str, text: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(&render_inline(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }
}
