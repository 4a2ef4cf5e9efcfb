//! # World Error Types

use thiserror::Error;

use crate::chunk::ChunkCoord;

/// Errors reported by world storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The chunk could not be loaded (storage fault, timeout, unloaded region).
    #[error("chunk {chunk} is unavailable")]
    ChunkUnavailable {
        /// The chunk that failed to load.
        chunk: ChunkCoord,
    },
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
