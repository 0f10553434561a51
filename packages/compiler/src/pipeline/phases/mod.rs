//! Pipeline Phases
//!
//! One pass per file. `DEFAULT_PASSES` is the single place the default
//! sequence is defined; the pipeline sorts it by order.

pub mod component_markup_diagnostics;
pub mod component_splat_lowering;

use super::PassDescriptor;

pub const DEFAULT_PASSES: &[PassDescriptor] = &[
    component_splat_lowering::PASS,
    component_markup_diagnostics::PASS,
];
