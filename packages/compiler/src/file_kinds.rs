//! File Kinds
//!
//! The kind of document being compiled, and the document kind its root node carries.

use crate::error::CompilerError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Document kind given to the root of component and component-import documents.
pub const COMPONENT_DOCUMENT_KIND: &str = "component.1.0";

/// Document kind given to the root of legacy view documents.
pub const LEGACY_DOCUMENT_KIND: &str = "mvc.1.0.view";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileKind {
    Legacy,
    #[default]
    Component,
    ComponentImport,
}

impl FileKind {
    pub fn is_component(&self) -> bool {
        matches!(self, FileKind::Component | FileKind::ComponentImport)
    }

    pub fn document_kind(&self) -> &'static str {
        if self.is_component() {
            COMPONENT_DOCUMENT_KIND
        } else {
            LEGACY_DOCUMENT_KIND
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Legacy => "legacy",
            FileKind::Component => "component",
            FileKind::ComponentImport => "componentImport",
        }
    }
}

impl FromStr for FileKind {
    type Err = CompilerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "legacy" | "mvc" => Ok(FileKind::Legacy),
            "component" => Ok(FileKind::Component),
            "componentImport" => Ok(FileKind::ComponentImport),
            other => Err(CompilerError::UnknownFileKind(other.to_string())),
        }
    }
}
