use crate::core::io::tables::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No {what} found in '{dir}'", dir = dir.display())]
    NotFound { what: String, dir: PathBuf },

    #[error("No usable records parsed for '{identifier}' from {files} matching file(s)")]
    EmptyResult { identifier: String, files: usize },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error for '{path}': {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: TableError,
    },

    #[error("Invalid cached background table '{path}': {reason}", path = path.display())]
    InvalidCache { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: TableError) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
