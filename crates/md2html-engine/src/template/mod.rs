//! # Page templates
//!
//! A small field-substitution template language: literal text plus
//! `{{ .Title }}` and `{{ .Content }}` actions, with `{{-`/`-}}` whitespace
//! trimming and `{{/* comments */}}`. Values are inserted verbatim; the
//! content is already HTML.

mod error;
mod parser;

pub use error::TemplateError;
use parser::{Node, parse_nodes};

/// Title used when the caller supplies an empty one.
pub const DEFAULT_TITLE: &str = "Converted Document";

/// Minimal HTML5 page used when no template is supplied.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{{ .Title }}</title>
</head>
<body>
{{ .Content }}
</body>
</html>
"#;

/// Values available to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateData<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> TemplateData<'a> {
    /// An empty `title` becomes [`DEFAULT_TITLE`].
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title: if title.is_empty() { DEFAULT_TITLE } else { title },
            content,
        }
    }

    fn field(&self, name: &str) -> Option<&'a str> {
        match name {
            "Title" => Some(self.title),
            "Content" => Some(self.content),
            _ => None,
        }
    }
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Name given to the page template in error messages.
    pub const DOCUMENT: &'static str = "document";

    pub fn parse(name: &str, src: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            name: name.to_string(),
            nodes: parse_nodes(name, src)?,
        })
    }

    /// Substitutes `data` into the template.
    ///
    /// Fails on the first field that `data` doesn't have.
    pub fn render(&self, data: &TemplateData<'_>) -> Result<String, TemplateError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Field { name, line } => {
                    let value = data.field(name).ok_or_else(|| {
                        TemplateError::execution(
                            &self.name,
                            *line,
                            format!("can't evaluate field {name}"),
                        )
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}
