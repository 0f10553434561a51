//! Intermediate Representation
//!
//! The document tree the lowering passes rewrite before code generation.

pub mod node;
pub mod reference;
pub mod serializer;
pub mod tree;

pub use node::{IntermediateNode, NodeId, NodeKind, TokenKind};
pub use reference::NodeReference;
pub use tree::DocumentTree;
