/// Convenience result type used across the fallible edges of the crate.
pub type RetargetResult<T> = Result<T, RetargetError>;

/// Error taxonomy for the few operations that can fail.
///
/// Planning itself is total; errors only surface from strict input validation,
/// configuration loading and worker-pool construction.
#[derive(thiserror::Error, Debug)]
pub enum RetargetError {
    /// Invalid caller-provided content or target data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid safe-area or session configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RetargetError {
    /// Build a [`RetargetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RetargetError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RetargetError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RetargetError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
