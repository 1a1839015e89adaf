//! Geometry, numeric hygiene and the error taxonomy.

/// Geometry value types.
pub mod core;
/// Error type and result alias.
pub mod error;
pub(crate) mod math;
