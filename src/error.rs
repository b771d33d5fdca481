//! Error taxonomy for the vocabulary store.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::WordId;

pub type Result<T> = std::result::Result<T, VocabError>;

/// Coarse classification of [`VocabError`], used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was rejected before any state changed.
    Validation,
    /// A lookup addressed a word that does not exist.
    NotFound,
    /// The durable file could not be read or written.
    Persistence,
    /// The durable file exists but holds neither known schema.
    Corrupt,
}

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: WordId, body_id: WordId },

    #[error("word id {id} is out of range (store holds {len} words)")]
    OutOfRange { id: WordId, len: usize },

    #[error("word {id} does not match the stored record")]
    StaleRecord { id: WordId },

    #[error("invalid word: {reason}")]
    Validation { reason: &'static str },

    #[error("word {id} not found")]
    NotFound { id: WordId },

    #[error("failed to persist vocabulary to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vocabulary store is corrupt: {reason}")]
    Corrupt { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VocabError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IdMismatch { .. }
            | Self::OutOfRange { .. }
            | Self::StaleRecord { .. }
            | Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Persistence { .. } | Self::Io(_) | Self::Json(_) => ErrorKind::Persistence,
            Self::Corrupt { .. } => ErrorKind::Corrupt,
        }
    }

    /// True when the error left the store untouched because the request itself was bad.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::NotFound)
    }
}
