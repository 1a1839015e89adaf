//! Uniform scale selection.

pub mod selector;
