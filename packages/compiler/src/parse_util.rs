//! Parse Utilities
//!
//! Source locations attached to descriptors, diagnostics and intermediate nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A span of source text. Line and character indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpan {
    pub file_path: Option<String>,
    pub absolute_index: usize,
    pub line_index: usize,
    pub character_index: usize,
    pub length: usize,
}

impl SourceSpan {
    pub fn new(
        file_path: Option<String>,
        absolute_index: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        SourceSpan {
            file_path,
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Span without a file, used by synthesized nodes and by tests.
    pub fn at(absolute_index: usize, line_index: usize, character_index: usize, length: usize) -> Self {
        SourceSpan::new(None, absolute_index, line_index, character_index, length)
    }

    pub fn end_index(&self) -> usize {
        self.absolute_index + self.length
    }

    pub fn contains(&self, other: &SourceSpan) -> bool {
        self.file_path == other.file_path
            && self.absolute_index <= other.absolute_index
            && other.end_index() <= self.end_index()
    }
}

impl fmt::Display for SourceSpan {
    /// `(absolute:line,character [length] file)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}:{},{} [{}] {})",
            self.absolute_index,
            self.line_index,
            self.character_index,
            self.length,
            self.file_path.as_deref().unwrap_or("")
        )
    }
}
