//! Compiler Errors
//!
//! Caller mistakes only. Problems in authored content are reported as
//! [`Diagnostic`](crate::diagnostics::Diagnostic)s and never surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerError {
    /// A required construction argument was absent or empty.
    #[error("value cannot be null or empty: `{0}`")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a valid language version")]
    InvalidLanguageVersion(String),

    #[error("'{0}' is not a known file kind")]
    UnknownFileKind(String),

    /// The driver stopped the compilation at a pass boundary.
    #[error("compilation cancelled before pass `{before_pass}`")]
    Cancelled { before_pass: &'static str },

    #[error("intermediate tree is malformed: {0}")]
    MalformedTree(String),
}

pub type Result<T> = std::result::Result<T, CompilerError>;

/// Fails with [`CompilerError::MissingArgument`] when `value` is empty.
pub(crate) fn require_non_empty(value: String, name: &'static str) -> Result<String> {
    if value.is_empty() {
        return Err(CompilerError::MissingArgument(name));
    }
    Ok(value)
}
