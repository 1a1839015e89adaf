//! Orientation resolution.

/// Three-tier orientation resolver.
pub mod resolver;
