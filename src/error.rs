//! Error taxonomy for drag handling and board loading.
//!
//! None of these are fatal to the engine. Drag errors abort the effect of a
//! single event and are surfaced as diagnostics; the next event starts clean.

use crate::doc::Id;

/// Stable machine-readable code attached to every error in this crate.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// Why a drag descriptor did not carry a usable payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The descriptor has no data attached at all.
    #[error("no draggable data for {id}")]
    Missing { id: Id },
    /// The data has no `type` tag, or the tag is not `Column` or `Item`.
    #[error("unrecognized draggable type for {id}: {tag}")]
    UnknownKind { id: Id, tag: String },
    /// The tag is recognized but the entity field is absent or malformed.
    #[error("malformed draggable data for {id}: {source}")]
    Malformed {
        id: Id,
        #[source]
        source: serde_json::Error,
    },
}

/// A drag event that could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),
    /// An id named by the event is not present in the relevant collection.
    #[error("dangling reference: {id}")]
    DanglingReference { id: Id },
}

impl ErrorCode for DragError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "E_MALFORMED_PAYLOAD",
            Self::DanglingReference { .. } => "E_DANGLING_REFERENCE",
        }
    }
}

/// Position out of range for an ordered move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl ErrorCode for MoveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "E_MOVE_OUT_OF_BOUNDS",
        }
    }
}

/// Errors produced while loading an initial board.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse board JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: Id },
    #[error("item {item} references unknown column {column}")]
    UnknownColumn { item: Id, column: Id },
}

impl ErrorCode for SeedError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "E_SEED_IO",
            Self::Parse(_) => "E_SEED_PARSE",
            Self::DuplicateId { .. } => "E_SEED_DUPLICATE_ID",
            Self::UnknownColumn { .. } => "E_SEED_UNKNOWN_COLUMN",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
