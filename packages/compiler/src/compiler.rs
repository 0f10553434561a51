//! Template Compiler
//!
//! Drives documents through the lowering pipeline and hands back trees ready
//! for code generation. One compiler shares its catalog read-only across every
//! document it compiles, including documents compiled in parallel.

use crate::config::CompilerConfig;
use crate::descriptors::TagHelperCatalog;
use crate::diagnostics::{self, Diagnostic};
use crate::error::Result;
use crate::feature_flags::ParserFeatureFlags;
use crate::file_kinds::FileKind;
use crate::intermediate::DocumentTree;
use crate::pipeline::{CancellationToken, CodeDocument, Pipeline};
use rayon::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TemplateCompiler {
    config: CompilerConfig,
    catalog: Arc<TagHelperCatalog>,
    pipeline: Pipeline,
}

/// A fully lowered document, plus the catalog it was lowered against.
#[derive(Debug, Clone)]
pub struct CompiledDocument {
    pub tree: DocumentTree,
    pub catalog: Arc<TagHelperCatalog>,
    pub feature_flags: ParserFeatureFlags,
    pub file_kind: FileKind,
}

impl CompiledDocument {
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.tree.diagnostics()
    }

    pub fn has_errors(&self) -> bool {
        diagnostics::has_errors(self.tree.diagnostics())
    }
}

impl TemplateCompiler {
    pub fn new(config: CompilerConfig, catalog: TagHelperCatalog) -> Self {
        TemplateCompiler {
            config,
            catalog: Arc::new(catalog),
            pipeline: Pipeline::default(),
        }
    }

    /// Builds a compiler, loading the catalog named by `config`.
    pub fn from_config(config: CompilerConfig) -> anyhow::Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(TemplateCompiler::new(config, catalog))
    }

    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<TagHelperCatalog> {
        &self.catalog
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Wraps a parsed tree as the configured file kind, resolving feature
    /// flags for the configured language version.
    pub fn create_document(&self, tree: DocumentTree) -> CodeDocument {
        self.create_document_for(tree, self.config.file_kind)
    }

    /// Like [`create_document`](Self::create_document), overriding the file kind.
    pub fn create_document_for(&self, tree: DocumentTree, file_kind: FileKind) -> CodeDocument {
        CodeDocument::new(
            tree,
            file_kind,
            self.config.language_version,
            Arc::clone(&self.catalog),
        )
    }

    pub fn compile(&self, document: CodeDocument) -> Result<CompiledDocument> {
        self.compile_with_cancellation(document, &CancellationToken::new())
    }

    pub fn compile_with_cancellation(
        &self,
        mut document: CodeDocument,
        token: &CancellationToken,
    ) -> Result<CompiledDocument> {
        self.pipeline.run_with_cancellation(&mut document, token)?;
        document.tree.validate()?;

        Ok(CompiledDocument {
            tree: document.tree,
            catalog: document.catalog,
            feature_flags: document.feature_flags,
            file_kind: document.file_kind,
        })
    }

    /// Compiles independent documents in parallel. Results keep input order.
    pub fn compile_all(&self, documents: Vec<CodeDocument>) -> Vec<Result<CompiledDocument>> {
        documents
            .into_par_iter()
            .map(|document| self.compile(document))
            .collect()
    }
}
