//! Error types for interchange operations.

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while exporting or importing a model.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported operation for a format.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Imported data did not assemble into a model.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

impl From<serde_json::Error> for InterchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InterchangeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::yaml(err.to_string())
    }
}
