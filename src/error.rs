use crate::model::Block;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    /// A required field was missing or blank. Detected before any store call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The caller-supplied block id does not parse as a UUID.
    #[error("Invalid block id: {0:?}")]
    InvalidId(String),

    /// The target block or section does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store adapter failed or the operation deadline was exceeded.
    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The primary mutation succeeded but the corrective relabeling pass
    /// failed or only partially completed. The label sequence may be sparse
    /// until a later resequence pass; renames already applied stay applied.
    ///
    /// Carries the partial outcome so callers keep what the operation did
    /// accomplish: the block created by `add_block`, or the number of blocks
    /// removed by `delete_block` / `delete_section`.
    #[error("Section renumbering failed: {reason}")]
    Resequence {
        reason: String,
        block: Option<Block>,
        deleted: u64,
    },
}

impl DeckError {
    /// True for every failure kind originating in the store adapter,
    /// including deadline exhaustion and file-store I/O.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            DeckError::Store(_) | DeckError::Io(_) | DeckError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
