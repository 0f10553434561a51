//! Pass Pipeline
//!
//! Passes run in ascending `order`; passes sharing an order keep their
//! registration order. Each pass may assume every pass with a smaller order
//! has already finished on the whole tree.

use super::cancellation::CancellationToken;
use super::code_document::CodeDocument;
use super::phases;
use crate::error::{CompilerError, Result};
use std::fmt;

#[derive(Clone, Copy)]
pub struct PassDescriptor {
    pub name: &'static str,
    pub order: i32,
    /// Cheap whole-document check; the pass is skipped when it returns false.
    pub applies: fn(&CodeDocument) -> bool,
    pub run: fn(&mut CodeDocument) -> Result<()>,
}

impl fmt::Debug for PassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassDescriptor")
            .field("name", &self.name)
            .field("order", &self.order)
            .finish()
    }
}

/// Applicability predicate for passes that run on every document.
pub fn always(_: &CodeDocument) -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    passes: Vec<PassDescriptor>,
}

impl Default for Pipeline {
    fn default() -> Self {
        let mut pipeline = Pipeline::empty();
        for pass in phases::DEFAULT_PASSES {
            pipeline.register(*pass);
        }
        pipeline
    }
}

impl Pipeline {
    pub fn empty() -> Self {
        Pipeline { passes: Vec::new() }
    }

    pub fn register(&mut self, pass: PassDescriptor) -> &mut Self {
        self.passes.push(pass);
        // stable: ties stay in registration order
        self.passes.sort_by_key(|pass| pass.order);
        self
    }

    pub fn passes(&self) -> &[PassDescriptor] {
        &self.passes
    }

    pub fn ordered_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name).collect()
    }

    pub fn run(&self, document: &mut CodeDocument) -> Result<()> {
        self.run_with_cancellation(document, &CancellationToken::new())
    }

    /// Runs every pass, checking `token` before each one. On cancellation the
    /// tree is left exactly as the last completed pass produced it.
    pub fn run_with_cancellation(
        &self,
        document: &mut CodeDocument,
        token: &CancellationToken,
    ) -> Result<()> {
        for pass in &self.passes {
            if token.is_cancelled() {
                tracing::debug!(before_pass = pass.name, "compilation cancelled");
                return Err(CompilerError::Cancelled {
                    before_pass: pass.name,
                });
            }

            if !(pass.applies)(document) {
                tracing::trace!(pass = pass.name, "pass does not apply, skipping");
                continue;
            }

            let span = tracing::debug_span!("pass", name = pass.name, order = pass.order);
            let _enter = span.enter();
            (pass.run)(document)?;
        }
        Ok(())
    }
}
