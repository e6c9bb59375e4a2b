/// Failures while parsing or rendering a page template.
///
/// Both messages contain the word "template" so callers can recognise them
/// without matching on the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("error parsing template {name}:{line}: {message}")]
    Parse {
        name: String,
        line: usize,
        message: String,
    },
    #[error("error executing template {name}:{line}: {message}")]
    Execution {
        name: String,
        line: usize,
        message: String,
    },
}

impl TemplateError {
    pub(crate) fn parse(name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            name: name.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn execution(name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Execution {
            name: name.to_string(),
            line,
            message: message.into(),
        }
    }
}
