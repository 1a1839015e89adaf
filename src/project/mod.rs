//! Placement of freeform children.

/// Freeform projection and advisory placement.
pub mod absolute;
