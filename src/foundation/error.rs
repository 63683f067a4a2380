/// Convenience result type used across calsvg.
pub type CalsvgResult<T> = Result<T, CalsvgError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CalsvgError {
    /// Invalid user-provided dates, options, or theme values.
    #[error("validation error: {0}")]
    Validation(String),

    /// An event source violates its schema (for example, required columns are missing).
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalsvgError {
    /// Build a [`CalsvgError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalsvgError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CalsvgError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CalsvgError::Config`] naming every missing column of a source.
    pub fn missing_columns(source: impl std::fmt::Display, missing: &[&str]) -> Self {
        Self::Config(format!(
            "'{source}' is missing required column(s): {}",
            missing.join(", ")
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
