use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (command layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RfcError(#[from] vcfkit_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] vcfkit_core::error::CoreError),

    #[error("I/O error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("No contact at index {index}; the file holds {count}")]
    ContactNotFound { index: u64, count: usize },
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::IoError { path, source }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
