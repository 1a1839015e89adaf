//! Target profiling and source content analysis.

/// Content box, density and scale strategy.
pub mod content;
/// Target aspect profiles.
pub mod profile;
