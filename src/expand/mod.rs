//! Free-space planning along one axis.

/// Edge padding distribution.
pub mod padding;
/// Axis expansion planning.
pub mod planner;
