//! # NETHERGATE Event System
//!
//! Channels between the host and the portal system.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  block events  ┌──────────────┐  portal events  ┌─────────────┐
//! │    Host     │───────────────>│ PortalSystem │────────────────>│    Host     │
//! │ (world tick)│                │  (engine)    │   + effects     │ (broadcast) │
//! └─────────────┘                └──────────────┘                 └─────────────┘
//! ```
//!
//! Both directions use bounded crossbeam channels. A full channel drops the
//! event rather than stall the tick.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use nethergate_portal::{EffectSink, FrameGeometry, PortalId};
use nethergate_world::{Block, BlockPos, ChunkCoord};

/// Default capacity of each channel.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Events exchanged between the host and the portal system.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    // =========================================================================
    // Block Events (Host → PortalSystem)
    // =========================================================================
    /// A block was placed. Fire placement triggers discovery.
    BlockPlaced {
        /// Where the block now sits.
        pos: BlockPos,
        /// The placed block.
        block: Block,
    },

    /// A block was broken and is now air.
    BlockBroken {
        /// Where the block was.
        pos: BlockPos,
        /// The block that was removed.
        block: Block,
    },

    /// A block changed next to `pos`.
    NeighborUpdated {
        /// The block being notified.
        pos: BlockPos,
    },

    // =========================================================================
    // Portal Events (PortalSystem → Host)
    // =========================================================================
    /// A frame was discovered and filled.
    PortalLit {
        /// Registry id of the new portal.
        id: PortalId,
        /// Its frame.
        geometry: FrameGeometry,
    },

    /// A portal's frame became invalid; its interior was cleared and the
    /// id retired.
    PortalBroken {
        /// The retired id.
        id: PortalId,
    },

    /// Play a block-break effect to viewers of `chunk`.
    BlockBreakEffect {
        /// Chunk holding the block.
        chunk: ChunkCoord,
        /// Block position.
        pos: BlockPos,
        /// Block whose break effect to show.
        block: Block,
    },
}

/// One-way event channel.
pub struct EventBus {
    sender: Sender<GameEvent>,
    receiver: Receiver<GameEvent>,
}

impl EventBus {
    /// Creates a bus holding at most `capacity` events in flight.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender and receiver.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Sends an event without blocking.
    ///
    /// Returns `false` if the channel is full or closed; the event is dropped.
    #[inline]
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!("Event channel full, dropped {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Takes every pending event without blocking.
    #[inline]
    pub fn drain(&self) -> Vec<GameEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one event if any is pending.
    #[inline]
    pub fn try_recv(&self) -> Option<GameEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Returns true if any event is pending.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

/// Effect sink that turns block-break effects into outbound events.
#[derive(Clone)]
pub struct ChannelEffects {
    sender: EventSender,
}

impl ChannelEffects {
    /// Wraps an outbound sender.
    #[must_use]
    pub const fn new(sender: EventSender) -> Self {
        Self { sender }
    }
}

impl EffectSink for ChannelEffects {
    fn broadcast_block_break(&self, chunk: ChunkCoord, pos: BlockPos, block: Block) {
        self.sender
            .send(GameEvent::BlockBreakEffect { chunk, pos, block });
    }
}

/// Both directions of channels for one portal system.
pub struct EventSystem {
    /// Host side: report block events.
    pub block_sender: EventSender,
    /// Portal system side: consume block events.
    pub block_receiver: EventReceiver,
    /// Portal system side: report portal events and effects.
    pub portal_sender: EventSender,
    /// Host side: consume portal events and effects.
    pub portal_receiver: EventReceiver,
}

impl EventSystem {
    /// Creates both channels with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (block_sender, block_receiver) = EventBus::create_pair(capacity);
        let (portal_sender, portal_receiver) = EventBus::create_pair(capacity);
        Self {
            block_sender,
            block_receiver,
            portal_sender,
            portal_receiver,
        }
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_send_receive() {
        let (sender, receiver) = EventBus::create_pair(16);
        let event = GameEvent::BlockBroken {
            pos: BlockPos::new(10, 20, 30),
            block: Block::OBSIDIAN,
        };

        assert!(sender.send(event.clone()));
        assert!(receiver.has_events());
        assert_eq!(receiver.try_recv(), Some(event));
        assert!(receiver.try_recv().is_none());
    }

    #[test]
    fn test_full_channel_drops() {
        let (sender, receiver) = EventBus::create_pair(2);
        for i in 0..2 {
            assert!(sender.send(GameEvent::NeighborUpdated {
                pos: BlockPos::new(i, 0, 0)
            }));
        }
        assert!(!sender.send(GameEvent::NeighborUpdated {
            pos: BlockPos::new(9, 0, 0)
        }));
        assert_eq!(receiver.pending_count(), 2);
        assert_eq!(receiver.drain().len(), 2);
        assert!(!receiver.has_events());
    }

    #[test]
    fn test_channel_effects_emit_events() {
        let system = EventSystem::default();
        let effects = ChannelEffects::new(system.portal_sender.clone());
        let pos = BlockPos::new(-1, 70, 17);
        effects.broadcast_block_break(pos.chunk(), pos, Block::NETHER_PORTAL);

        assert_eq!(
            system.portal_receiver.drain(),
            vec![GameEvent::BlockBreakEffect {
                chunk: ChunkCoord::new(-1, 1),
                pos,
                block: Block::NETHER_PORTAL,
            }]
        );
        assert!(!system.block_receiver.has_events());
    }
}
