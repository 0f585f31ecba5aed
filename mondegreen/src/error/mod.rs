//! Error types and reporting

use crate::ast::Span;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LangError>;

/// Top-level error for lexicon loading, parsing, and execution
#[derive(Debug, Error)]
pub enum LangError {
    #[error("Lexicon error: {message}")]
    Lexicon { message: String },

    #[error("Parse error at {span}: {message}")]
    Parse { message: String, span: Span },

    #[error("Runtime error at {span}: {message}")]
    Runtime { message: String, span: Span },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl LangError {
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            message: message.into(),
            span,
        }
    }

    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Parse { span, .. } | Self::Runtime { span, .. } => Some(*span),
            Self::Lexicon { .. } | Self::Io { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Lexicon { message }
            | Self::Parse { message, .. }
            | Self::Runtime { message, .. }
            | Self::Io { message } => message,
        }
    }
}

impl From<crate::interp::RuntimeError> for LangError {
    fn from(error: crate::interp::RuntimeError) -> Self {
        Self::Runtime {
            message: error.message.clone(),
            span: error.span,
        }
    }
}

/// Report error with ariadne
pub fn report_error(filename: &str, source: &str, error: &LangError) {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let kind = match error {
        LangError::Lexicon { .. } => "Lexicon",
        LangError::Parse { .. } => "Parse",
        LangError::Runtime { .. } => "Runtime",
        LangError::Io { .. } => "IO",
    };

    if let Some(span) = error.span() {
        Report::build(ReportKind::Error, (filename, span.start..span.end))
            .with_message(format!("{kind} error"))
            .with_label(
                Label::new((filename, span.start..span.end))
                    .with_message(error.message())
                    .with_color(Color::Red),
            )
            .finish()
            .print((filename, Source::from(source)))
            .unwrap();
    } else {
        // Errors without span (lexicon configuration, IO)
        Report::build(ReportKind::Error, (filename, 0..0))
            .with_message(format!("{kind} error: {}", error.message()))
            .finish()
            .print((filename, Source::from(source)))
            .unwrap();
    }
}
