//! # Frame Discovery
//!
//! Infers a frame from a single seed block (usually the fire that was just
//! lit) by flood-filling the vertical plane through it.
//!
//! ## Algorithm
//!
//! 1. Breadth-first search from the seed over air/fire/portal cells, moving
//!    only up, down, and both ways along the axis. Cells at a distance of
//!    `max_width` (along the axis) or `max_height` (vertically) or more from
//!    the seed are skipped, which bounds the search to a fixed box.
//! 2. The bounding box of every accepted cell is the interior hypothesis.
//! 3. The whole hypothesized interior must be clear (rejects L-shapes and
//!    other concave regions), and must fit the configured size.
//! 4. The ring one block outside the box must be an obsidian frame.
//!
//! `AlongX` is tried before `AlongZ`. A seed that fits both (a 1-wide
//! opening, say) resolves to the X-aligned frame.

use std::collections::{HashSet, VecDeque};

use nethergate_world::{BlockPos, World};

use crate::axis::Axis;
use crate::config::PortalConfig;
use crate::frame::{geometry_is_obsidian_frame, is_interior_clear};
use crate::geometry::FrameGeometry;

/// Bounded flood-fill frame finder.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameDiscoverer {
    config: PortalConfig,
}

impl FrameDiscoverer {
    /// Creates a discoverer with the given bounds.
    #[must_use]
    pub const fn new(config: PortalConfig) -> Self {
        Self { config }
    }

    /// Looks for a frame around `seed`, trying `AlongX` then `AlongZ`.
    #[must_use]
    pub fn find(&self, world: &dyn World, seed: BlockPos) -> Option<FrameGeometry> {
        Axis::ALL
            .into_iter()
            .find_map(|axis| self.find_along(world, seed, axis))
    }

    /// Looks for a frame around `seed` in the plane of one axis.
    #[must_use]
    pub fn find_along(&self, world: &dyn World, seed: BlockPos, axis: Axis) -> Option<FrameGeometry> {
        let (min, max) = self.flood_interior(world, seed, axis)?;
        let geometry = FrameGeometry::enclosing(axis, min, max);

        if !is_interior_clear(world, geometry.min(), geometry.max(), axis) {
            tracing::debug!("No {}-frame at {}: interior is not a clear rectangle", axis, seed);
            return None;
        }

        if !self.config.admits(&geometry) {
            tracing::debug!(
                "No {}-frame at {}: interior {}x{} out of bounds",
                axis,
                seed,
                geometry.interior_width(),
                geometry.interior_height()
            );
            return None;
        }

        if !geometry_is_obsidian_frame(world, &geometry) {
            tracing::debug!("No {}-frame at {}: perimeter is not obsidian", axis, seed);
            return None;
        }

        Some(geometry)
    }

    /// Flood-fills from `seed` and returns the bounding box of the accepted
    /// cells, or `None` if the seed itself is a wall.
    fn flood_interior(
        &self,
        world: &dyn World,
        seed: BlockPos,
        axis: Axis,
    ) -> Option<(BlockPos, BlockPos)> {
        let mut queue = VecDeque::from([seed]);
        let mut seen: HashSet<BlockPos> = HashSet::from([seed]);
        let mut bounds: Option<(BlockPos, BlockPos)> = None;

        while let Some(pos) = queue.pop_front() {
            let width = (axis.project(pos) - axis.project(seed)).abs();
            let height = (pos.y - seed.y).abs();
            if width >= self.config.max_width || height >= self.config.max_height {
                continue;
            }

            if !world.get_block(pos).is_portal_interior() {
                continue;
            }

            bounds = Some(match bounds {
                None => (pos, pos),
                Some((lo, hi)) => (
                    BlockPos::new(lo.x.min(pos.x), lo.y.min(pos.y), lo.z.min(pos.z)),
                    BlockPos::new(hi.x.max(pos.x), hi.y.max(pos.y), hi.z.max(pos.z)),
                ),
            });

            for next in [pos.above(), pos.below(), axis.step(pos, -1), axis.step(pos, 1)] {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        bounds
    }
}
