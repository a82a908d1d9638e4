use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

// ============= Evaluation errors (simple, no spans) =============

#[derive(Error, Debug, Diagnostic)]
pub enum CalcError {
    #[error("Division by zero is not allowed")]
    #[diagnostic(code(kata::divide_by_zero))]
    DivisionByZero,
}

// ============= Expression parse errors (with miette diagnostics) =============

#[derive(Error, Debug, Diagnostic)]
pub enum ExprError {
    #[error("expression error: {message}")]
    #[diagnostic(code(kata::expr))]
    Parse {
        message: String,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl ExprError {
    pub fn parse(message: impl Into<String>, offset: usize, len: usize) -> Self {
        Self::Parse {
            message: message.into(),
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        match self {
            Self::Parse { message, span, .. } => Self::Parse {
                message,
                span,
                src: miette::NamedSource::new(name.into(), source.into()),
            },
        }
    }
}
