//! Lowering Pipeline
//!
//! Ordered rewrite passes over a document's intermediate tree.

pub mod cancellation;
pub mod code_document;
pub mod pass;
pub mod phases;

pub use cancellation::CancellationToken;
pub use code_document::CodeDocument;
pub use pass::{always, PassDescriptor, Pipeline};
