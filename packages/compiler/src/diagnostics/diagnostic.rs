//! Diagnostic
//!
//! One report with a code, severity, message and optional source span.

use super::error_code::{diagnostic_id, ErrorCode};
use crate::parse_util::SourceSpan;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// An immutable report about authored content. Only
/// [`factory`](super::factory) constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub(crate) fn new(
        code: ErrorCode,
        severity: Severity,
        message: String,
        span: Option<SourceSpan>,
    ) -> Self {
        Diagnostic {
            code,
            severity,
            message,
            span,
        }
    }

    pub fn id(&self) -> String {
        diagnostic_id(self.code)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match &self.span {
            Some(span) => write!(f, "{} {}: {} {}", level, self.id(), self.message, span),
            None => write!(f, "{} {}: {}", level, self.id(), self.message),
        }
    }
}

/// True iff any diagnostic has error severity.
pub fn has_errors<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> bool {
    diagnostics.into_iter().any(Diagnostic::is_error)
}
