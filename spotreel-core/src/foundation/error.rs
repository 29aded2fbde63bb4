use std::path::PathBuf;

/// Convenience result type used across spotreel.
pub type SpotreelResult<T> = Result<T, SpotreelError>;

/// Top-level error taxonomy used by the planning and loading APIs.
///
/// Entity decoding and unique selection never fail and do not use this type.
#[derive(thiserror::Error, Debug)]
pub enum SpotreelError {
    /// Invalid user-provided records, media or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem access failed for a specific path.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// Path being read or listed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotreelError {
    /// Build a [`SpotreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotreelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SpotreelError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
