//! # md2html engine
//!
//! Converts a constrained subset of markdown into an HTML body and places it
//! into a page template.
//!
//! The pipeline is:
//!
//! 1. [`parsing::render_body`] walks the input lines, classifying each one and
//!    assembling headers, paragraphs, fenced code and nested lists.
//! 2. Inline content of every rendered line goes through
//!    [`parsing::inline::render_inline`] (code spans, links, autolinks, escaping).
//! 3. [`template::Template`] substitutes the title and body into the page.
//!
//! Conversion is pure: no I/O, no shared state between calls.

pub mod escape;
pub mod parsing;
pub mod template;

pub use escape::escape;
pub use parsing::{
    blocks::{LineClass, classify},
    inline::render_inline,
    render_body,
};
pub use template::{DEFAULT_TEMPLATE, DEFAULT_TITLE, Template, TemplateData, TemplateError};

/// Converts `markdown` into a full document using `template_text`.
///
/// The template is parsed before any markdown work happens, so a broken
/// template is reported even for empty input. An empty `title` falls back to
/// [`DEFAULT_TITLE`].
pub fn convert(markdown: &str, template_text: &str, title: &str) -> Result<String, TemplateError> {
    let template = Template::parse(Template::DOCUMENT, template_text)?;
    let content = render_body(markdown);
    template.render(&TemplateData::new(title, &content))
}
