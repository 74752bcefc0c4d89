use thiserror::Error;

/// Errors returned when a document operation is called outside its preconditions.
///
/// A failed call leaves the document untouched and emits no notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// `undo` was called with the cursor already at the initial snapshot
    #[error("nothing to undo")]
    NothingToUndo,

    /// `redo` was called with the cursor already at the newest snapshot
    #[error("nothing to redo")]
    NothingToRedo,

    #[error("shape index {index} out of range for {len} shapes")]
    ShapeIndexOutOfRange { index: usize, len: usize },

    #[error("color index {index} out of range for palette of {len} colors")]
    ColorIndexOutOfRange { index: usize, len: usize },

    /// A bound edge was NaN or infinite; such shapes cannot be persisted
    #[error("shape {index} has a non-finite bound")]
    NonFiniteBound { index: usize },
}

/// Errors that make a persisted blob unusable. Decoding is all-or-nothing.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not JSON, a missing field, an unknown literal, or a value of the wrong type
    #[error("malformed document blob: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("document blob has no history")]
    EmptyHistory,

    #[error("history cursor {cursor} out of range for {len} snapshots")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("color index {index} out of range for palette of {len} colors")]
    ColorIndexOutOfRange { index: usize, len: usize },

    /// A coordinate overflowed `f32` while parsing
    #[error("shape {index} in snapshot {snapshot} has a non-finite bound")]
    NonFiniteBound { snapshot: usize, index: usize },
}

/// Errors that can occur while storing or loading the persisted blob
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access session store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode document: {0}")]
    Encode(serde_json::Error),

    #[error("stored document is unusable: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
