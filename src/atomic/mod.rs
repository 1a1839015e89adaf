//! Atomic (rigid) group detection.

/// Rigid group classification.
pub mod classifier;
