//! # Portal Error Types
//!
//! Not finding a portal is not an error. These cover the cases where a
//! caller asked for something that could not be done.

use nethergate_world::{ChunkCoord, WorldError};
use thiserror::Error;

use crate::registry::PortalId;

/// Errors that can occur in the portal engine.
#[derive(Error, Debug)]
pub enum PortalError {
    /// A chunk needed before writing the frame could not be loaded.
    #[error("chunk {chunk} could not be loaded for portal generation")]
    ChunkLoad {
        /// The chunk that failed.
        chunk: ChunkCoord,
        /// Failure reported by the world.
        #[source]
        source: WorldError,
    },

    /// The frame is outside the configured size bounds.
    #[error("frame of {width}x{height} is outside the allowed size")]
    OutOfBounds {
        /// Frame-inclusive width.
        width: i32,
        /// Frame-inclusive height.
        height: i32,
    },

    /// The world's dimension never ignites portals.
    #[error("portals cannot be lit in this dimension")]
    DimensionForbidsPortals,

    /// Something other than air, fire or portal material sits inside the frame.
    #[error("frame interior is obstructed")]
    InteriorObstructed,

    /// A non-corner frame block is not obsidian.
    #[error("frame perimeter is not obsidian")]
    FrameIncomplete,

    /// The id was never handed out by this registry, or was retired.
    #[error("{0} was not allocated by this registry or has been removed")]
    UnallocatedId(PortalId),

    /// Invalid configuration values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}

/// Result type for portal operations.
pub type PortalResult<T> = Result<T, PortalError>;
