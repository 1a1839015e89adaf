//! Advisory hints from an external layout predictor.

/// Hint model and lenient parsing.
pub mod hints;
