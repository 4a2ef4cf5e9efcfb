//! # Frame Validation
//!
//! Pure reads of world state. Nothing here writes a block.
//!
//! Corner blocks of a frame are never inspected: a ring of obsidian with
//! stone, air or anything else in its four corners is still a frame.

use nethergate_world::{BlockPos, World};

use crate::axis::Axis;
use crate::geometry::{interior_cells, FrameGeometry};

/// Checks that every non-corner perimeter block of a frame is obsidian.
///
/// Walks the bottom and top rows, then the left and right columns, and
/// stops at the first block that is not obsidian.
#[must_use]
pub fn is_obsidian_frame(
    world: &dyn World,
    axis: Axis,
    bottom_right: BlockPos,
    top_left: BlockPos,
) -> bool {
    let geometry = FrameGeometry::from_corners(axis, bottom_right, top_left);
    let min = geometry.min();
    let max_y = geometry.max().y;
    let width = geometry.width();
    let height = geometry.height();

    // top and bottom
    for i in 1..width - 1 {
        let column = axis.step(min, i);
        if !world.get_block(BlockPos::new(column.x, min.y, column.z)).is_obsidian() {
            return false;
        }
        if !world.get_block(BlockPos::new(column.x, max_y, column.z)).is_obsidian() {
            return false;
        }
    }

    // left and right
    let right = axis.step(min, width - 1);
    for j in 1..height - 1 {
        if !world.get_block(min.offset(0, j, 0)).is_obsidian() {
            return false;
        }
        if !world.get_block(right.offset(0, j, 0)).is_obsidian() {
            return false;
        }
    }

    true
}

/// Same as [`is_obsidian_frame`] for a stored geometry.
#[must_use]
pub fn geometry_is_obsidian_frame(world: &dyn World, geometry: &FrameGeometry) -> bool {
    is_obsidian_frame(
        world,
        geometry.axis(),
        geometry.bottom_right(),
        geometry.top_left(),
    )
}

/// Checks that every cell strictly inside the frame spanned by `min` and
/// `max` is air, fire or portal material.
#[must_use]
pub fn is_interior_clear(world: &dyn World, min: BlockPos, max: BlockPos, axis: Axis) -> bool {
    interior_cells(axis, min, max).all(|pos| world.get_block(pos).is_portal_interior())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nethergate_world::{Block, ChunkedWorld};

    fn framed_world(geometry: &FrameGeometry) -> ChunkedWorld {
        let world = ChunkedWorld::default();
        world.ensure_loaded_around(geometry.min().x, geometry.min().z, 2);
        world.fill(geometry.perimeter(), Block::OBSIDIAN);
        world
    }

    fn sample() -> FrameGeometry {
        FrameGeometry::from_corners(Axis::AlongX, BlockPos::new(0, 64, 0), BlockPos::new(3, 68, 0))
    }

    #[test]
    fn test_full_frame_is_valid() {
        let g = sample();
        let world = framed_world(&g);
        assert!(geometry_is_obsidian_frame(&world, &g));
        assert!(is_interior_clear(&world, g.min(), g.max(), g.axis()));
    }

    #[test]
    fn test_corners_are_unconstrained() {
        let g = sample();
        let world = framed_world(&g);
        for corner in [
            g.min(),
            g.max(),
            g.bottom_right(),
            g.top_left(),
        ] {
            world.set_block(corner, Block::STONE);
        }
        assert!(geometry_is_obsidian_frame(&world, &g));
    }

    #[test]
    fn test_missing_edge_block_fails() {
        let g = sample();
        let world = framed_world(&g);
        world.set_block(BlockPos::new(1, 68, 0), Block::STONE);
        assert!(!geometry_is_obsidian_frame(&world, &g));

        world.set_block(BlockPos::new(1, 68, 0), Block::OBSIDIAN);
        world.set_block(BlockPos::new(3, 66, 0), Block::AIR);
        assert!(!geometry_is_obsidian_frame(&world, &g));
    }

    #[test]
    fn test_obstructed_interior_fails() {
        let g = sample();
        let world = framed_world(&g);
        world.set_block(BlockPos::new(2, 66, 0), Block::DIRT);
        assert!(!is_interior_clear(&world, g.min(), g.max(), g.axis()));
    }

    #[test]
    fn test_fire_and_portal_count_as_clear() {
        let g = sample();
        let world = framed_world(&g);
        world.set_block(BlockPos::new(1, 65, 0), Block::FIRE);
        world.set_block(BlockPos::new(2, 67, 0), Block::NETHER_PORTAL);
        assert!(is_interior_clear(&world, g.min(), g.max(), g.axis()));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let g = sample();
        let world = framed_world(&g);
        let before = world.snapshot();
        let _ = geometry_is_obsidian_frame(&world, &g);
        let _ = is_interior_clear(&world, g.min(), g.max(), g.axis());
        assert_eq!(before, world.snapshot());
    }
}
