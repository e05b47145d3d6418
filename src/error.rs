//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// A menu action was dispatched before the presenter recorded a selection.
    #[error("Precondition Violated: {0}")]
    Precondition(String),

    /// The selection boundary produced an identifier outside the known menu actions.
    #[error("Unknown Action: `{0}`")]
    UnknownAction(String),

    /// Error related to standard I/O operations (terminal, raw mode, config file).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error while reading or writing the JSON config store.
    #[error("JSON Parsing Error: {0}")]
    JsonParse(Arc<serde_json::Error>),

    /// Configuration could not be resolved (missing directories and the like).
    #[error("Config Error: {0}")]
    Config(String),

    /// The first-time setup flow did not run to completion.
    #[error("Setup Error: {0}")]
    Setup(String),
}

impl AppError {
    /// True for errors that indicate a bug in the calling sequence rather than
    /// a failure of the environment or the user's input stream.
    pub fn is_programming_error(&self) -> bool {
        matches!(self, AppError::Precondition(_) | AppError::UnknownAction(_))
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonParse(Arc::new(err))
    }
}
