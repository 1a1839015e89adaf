//! Observer seam for planning decisions.

/// Plan events and observers.
pub mod observer;
