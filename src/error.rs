use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for boilersmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Operator input rejected by a field validator.
    ///
    /// Inside the interactive prompt loop these never escape: the field is
    /// re-asked. They surface fatally from the non-terminal collector and
    /// from [`crate::answers::AnswerSet::new`].
    #[error("{0}")]
    Validation(String),

    /// The boilerplates root directory does not exist.
    #[error("No boilerplates directory found at '{}'. Run this from the registry root.", .0.display())]
    RootNotFound(PathBuf),

    /// The requested template is not present in the template store.
    #[error("Template '{0}' not found")]
    MissingTemplate(String),

    /// A template failed to compile or render.
    #[error("Failed to render template '{name}': {details}")]
    Render { name: String, details: String },

    /// Directory creation failed.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// A generated file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    /// The operator aborted the prompt sequence.
    #[error("Cancelled.")]
    Cancelled,
}

impl AppError {
    pub(crate) fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}
