//! Error types for the library API.

use thiserror::Error;

/// Errors related to the prompt vault (setup, persistence, form input).
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred during vault initialization.
    #[error("Failed to initialize vault: {0}")]
    Init(String),

    /// No record has the requested ID.
    #[error("No prompt with ID '{0}'")]
    NotFound(String),

    /// A required form field was missing.
    #[error("{0}")]
    Validation(String),

    /// The slot could not be written; the previous contents are unchanged.
    #[error("Failed to save prompts: {0}")]
    Write(#[from] std::io::Error),

    /// Failed to serialize the record list.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
