//! Final container and per-child layout settings.

/// Turns axis plans and hints into an adaptation plan.
pub mod adapter;
/// Adaptation plan types handed to the node mutator.
pub mod plan;
