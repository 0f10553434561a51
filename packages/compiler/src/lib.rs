#![deny(clippy::all)]

/**
 * Markup Compiler
 *
 * Front-end lowering core for component templates: descriptor model,
 * intermediate tree, ordered rewrite passes and feature flags.
 */

// Core modules
pub mod chars;
pub mod compiler;
pub mod config;
pub mod error;
pub mod feature_flags;
pub mod file_kinds;
pub mod html_conventions;
pub mod language_version;
pub mod parse_util;

// Descriptor model
pub mod descriptors;
pub mod diagnostics;

// Lowering
pub mod intermediate;
pub mod pipeline;

// Re-exports
pub use compiler::{CompiledDocument, TemplateCompiler};
pub use config::CompilerConfig;
pub use error::{CompilerError, Result};
pub use feature_flags::ParserFeatureFlags;
pub use file_kinds::FileKind;
pub use language_version::LanguageVersion;
