//! QA checks on predicted target geometry.

/// Safe-area and centroid checks.
pub mod warnings;
