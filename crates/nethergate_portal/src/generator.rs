//! # Frame Generation
//!
//! The writing counterparts of the validator: load the terrain around a
//! frame, lay its obsidian ring, fill its interior with portal material.
//!
//! Writes are idempotent. Re-filling an interior that already holds this
//! portal's blocks leaves the world unchanged.

use nethergate_world::{Block, World};

use crate::error::{PortalError, PortalResult};
use crate::geometry::FrameGeometry;
use crate::registry::PortalId;

/// Loads the chunks within `radius` of both frame corners.
///
/// Blocks until every chunk is ready; stops at the first failure.
///
/// # Errors
///
/// Returns `PortalError::ChunkLoad` naming the chunk that failed.
pub fn load_around(world: &dyn World, geometry: &FrameGeometry, radius: i32) -> PortalResult<()> {
    for chunk in geometry.chunks_around_corners(radius) {
        world
            .load_chunk(chunk)
            .map_err(|source| PortalError::ChunkLoad { chunk, source })?;
    }
    Ok(())
}

/// Writes obsidian over the whole frame ring, corners included.
pub fn create_frame(world: &dyn World, geometry: &FrameGeometry) {
    for pos in geometry.perimeter() {
        world.set_block(pos, Block::OBSIDIAN);
    }
}

/// Fills the interior with portal blocks tagged with the owning portal id.
pub fn fill_interior(world: &dyn World, geometry: &FrameGeometry, id: PortalId) {
    for pos in geometry.interior() {
        world.set_tagged_block(pos, Block::NETHER_PORTAL, id.raw());
    }
}
