use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterInfoError {
    #[error("Missing argument: <{0}>")]
    MissingArgument(&'static str),

    #[error("Cannot read {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input {}: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RasterInfoError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RasterInfoError>;
