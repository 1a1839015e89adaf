//! Safe-area configuration.

/// Per-target safe-area insets.
pub mod safe_area;
