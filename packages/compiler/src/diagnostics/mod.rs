//! Diagnostics
//!
//! Problems found in authored content, reported instead of failing.

pub mod diagnostic;
pub mod error_code;
pub mod factory;

pub use diagnostic::*;
pub use error_code::*;
