//! Code Document
//!
//! Everything a pass may read or rewrite for one document.

use crate::descriptors::TagHelperCatalog;
use crate::feature_flags::ParserFeatureFlags;
use crate::file_kinds::{FileKind, COMPONENT_DOCUMENT_KIND};
use crate::intermediate::DocumentTree;
use crate::language_version::LanguageVersion;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CodeDocument {
    pub file_kind: FileKind,
    pub language_version: LanguageVersion,
    pub feature_flags: ParserFeatureFlags,
    pub tree: DocumentTree,
    pub catalog: Arc<TagHelperCatalog>,
}

impl CodeDocument {
    /// Resolves the feature flags for `language_version` and `file_kind`.
    pub fn new(
        tree: DocumentTree,
        file_kind: FileKind,
        language_version: LanguageVersion,
        catalog: Arc<TagHelperCatalog>,
    ) -> Self {
        CodeDocument {
            file_kind,
            language_version,
            feature_flags: ParserFeatureFlags::create(language_version, file_kind),
            tree,
            catalog,
        }
    }

    pub fn is_component_document(&self) -> bool {
        self.tree.document_kind() == COMPONENT_DOCUMENT_KIND
    }

    /// Component lowering runs only on component documents whose language
    /// version supports the component file kind.
    pub fn allows_component_passes(&self) -> bool {
        self.is_component_document() && self.feature_flags.allow_component_file_kind()
    }
}
