//! # Portal Lifecycle
//!
//! Re-validation and tear-down of registered portals, driven by block
//! updates the host reports after a portal exists.
//!
//! Validity is a property of the perimeter alone. Breaking a portal clears
//! its interior but leaves both the obsidian and the registry record; the
//! caller decides whether to unregister, since a frame that is invalid
//! mid-edit may become valid again.

use nethergate_world::{Block, BlockPos, World};

use crate::effects::EffectSink;
use crate::engine::PortalEngine;
use crate::frame::geometry_is_obsidian_frame;
use crate::geometry::{Center, FrameGeometry};
use crate::registry::PortalId;

impl PortalEngine {
    /// Re-checks a portal against the world.
    ///
    /// Unknown ids are never valid. A portal under construction is always
    /// valid; otherwise its stored perimeter must still be obsidian.
    #[must_use]
    pub fn is_still_valid(&self, world: &dyn World, id: PortalId) -> bool {
        let Some(portal) = self.registry().get(id) else {
            return false;
        };
        if portal.is_generating() {
            return true;
        }
        geometry_is_obsidian_frame(world, &portal.geometry)
    }

    /// Clears every interior cell of a portal to air and plays a
    /// portal-block break effect at each one, whatever the cell held.
    ///
    /// Returns false for unknown ids. The perimeter is left in place and the
    /// portal stays registered.
    pub fn break_frame(&self, world: &dyn World, effects: &dyn EffectSink, id: PortalId) -> bool {
        let Some(geometry) = self.lookup(id) else {
            return false;
        };

        let mut cleared = 0usize;
        for pos in geometry.interior() {
            world.set_block(pos, Block::AIR);
            effects.broadcast_block_break(pos.chunk(), pos, Block::NETHER_PORTAL);
            cleared += 1;
        }

        tracing::info!("Broke {}: cleared {} interior blocks", id, cleared);
        true
    }

    /// Breaks and unregisters a portal whose frame is no longer valid.
    ///
    /// Returns true if the portal was torn down.
    pub fn break_if_invalid(&self, world: &dyn World, effects: &dyn EffectSink, id: PortalId) -> bool {
        if self.is_still_valid(world, id) {
            return false;
        }
        if !self.break_frame(world, effects, id) {
            return false;
        }
        self.unregister(id)
    }

    /// Removes a portal from the registry. Its id is retired for good.
    pub fn unregister(&self, id: PortalId) -> bool {
        let removed = self.registry().remove(id).is_some();
        if removed {
            tracing::debug!("Unregistered {}", id);
        }
        removed
    }

    /// Geometry of a registered portal.
    #[must_use]
    pub fn lookup(&self, id: PortalId) -> Option<FrameGeometry> {
        self.registry().with_portal(id, |portal| portal.geometry)
    }

    /// Centre of a registered portal's frame.
    #[must_use]
    pub fn center_of(&self, id: PortalId) -> Option<Center> {
        self.lookup(id).map(|geometry| geometry.center())
    }

    /// Resolves the portal a block belongs to through its tag.
    ///
    /// Blocks carrying the tag of a retired portal resolve to `None`.
    #[must_use]
    pub fn portal_at(&self, world: &dyn World, pos: BlockPos) -> Option<PortalId> {
        let id = PortalId::from_raw(world.block_tag(pos)?);
        self.registry().with_portal(id, |portal| portal.id)
    }
}
