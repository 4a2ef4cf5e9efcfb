//! # Portal System
//!
//! Routes host block events into the portal engine once per tick.
//!
//! ```text
//! BlockPlaced(fire)        ──> discover ──> PortalLit
//! BlockPlaced / BlockBroken ┐
//! NeighborUpdated          ─┴─> portals touching pos ──> break_if_invalid ──> effects + PortalBroken
//! ```
//!
//! A portal is found through the tags of the updated block and its six
//! neighbours. Breaking any non-corner frame block touches at least one
//! interior cell, so that is enough to notice it.

use std::sync::Arc;

use nethergate_portal::{PortalEngine, PortalId};
use nethergate_world::{Block, BlockPos, World};

use crate::events::{ChannelEffects, EventReceiver, EventSender, GameEvent};

/// Connects a world and a portal engine to the event channels.
pub struct PortalSystem {
    engine: Arc<PortalEngine>,
    world: Arc<dyn World>,
    events: EventReceiver,
    output: EventSender,
    effects: ChannelEffects,
}

impl PortalSystem {
    /// Creates a system reading block events from `events` and reporting
    /// portal events and effects on `output`.
    #[must_use]
    pub fn new(
        engine: Arc<PortalEngine>,
        world: Arc<dyn World>,
        events: EventReceiver,
        output: EventSender,
    ) -> Self {
        let effects = ChannelEffects::new(output.clone());
        Self {
            engine,
            world,
            events,
            output,
            effects,
        }
    }

    /// The shared engine.
    #[must_use]
    pub fn engine(&self) -> &Arc<PortalEngine> {
        &self.engine
    }

    /// Handles every pending event. Returns how many were processed.
    pub fn tick(&self) -> usize {
        let events = self.events.drain();
        for event in &events {
            self.handle(event);
        }
        events.len()
    }

    /// Handles one event. Portal-side events are ignored.
    pub fn handle(&self, event: &GameEvent) {
        match *event {
            GameEvent::BlockPlaced { pos, block } if block.is_fire() => {
                self.on_fire_placed(pos);
            }
            GameEvent::BlockPlaced { pos, .. }
            | GameEvent::BlockBroken { pos, .. }
            | GameEvent::NeighborUpdated { pos } => {
                self.revalidate_around(pos);
            }
            GameEvent::PortalLit { .. }
            | GameEvent::PortalBroken { .. }
            | GameEvent::BlockBreakEffect { .. } => {}
        }
    }

    fn on_fire_placed(&self, pos: BlockPos) {
        let Some(id) = self.engine.discover(self.world.as_ref(), pos) else {
            return;
        };
        if let Some(geometry) = self.engine.lookup(id) {
            self.output.send(GameEvent::PortalLit { id, geometry });
        }
    }

    /// Re-checks every portal owning `pos` or one of its neighbours, and
    /// tears down those that are no longer valid.
    ///
    /// Returns the ids that were broken.
    pub fn revalidate_around(&self, pos: BlockPos) -> Vec<PortalId> {
        let mut candidates: Vec<PortalId> = std::iter::once(pos)
            .chain(pos.neighbors())
            .filter_map(|p| self.engine.portal_at(self.world.as_ref(), p))
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let mut broken = Vec::new();
        for id in candidates {
            if self
                .engine
                .break_if_invalid(self.world.as_ref(), &self.effects, id)
            {
                tracing::info!("{} broken by update at {}", id, pos);
                self.output.send(GameEvent::PortalBroken { id });
                broken.push(id);
            }
        }
        broken
    }

    /// Convenience for hosts that mutate the world directly: sets the block
    /// and handles the matching event immediately.
    pub fn place_block(&self, pos: BlockPos, block: Block) {
        self.world.set_block(pos, block);
        self.handle(&GameEvent::BlockPlaced { pos, block });
    }

    /// Breaks a block to air and handles the matching event immediately.
    pub fn break_block(&self, pos: BlockPos) {
        let block = self.world.get_block(pos);
        self.world.set_block(pos, Block::AIR);
        self.handle(&GameEvent::BlockBroken { pos, block });
    }
}
