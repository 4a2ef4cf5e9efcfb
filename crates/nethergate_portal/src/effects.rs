//! # Effect Broadcast
//!
//! The engine decides which cells get a break effect and what block it
//! shows. Delivering it to viewers is the collaborator's job.

use nethergate_world::{Block, BlockPos, ChunkCoord};

/// Receiver of visual/audio effects produced by the engine.
pub trait EffectSink: Send + Sync {
    /// Plays the block-break effect for `block` at `pos` to viewers of `chunk`.
    fn broadcast_block_break(&self, chunk: ChunkCoord, pos: BlockPos, block: Block);
}

/// Sink that drops every effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl EffectSink for NoEffects {
    fn broadcast_block_break(&self, _chunk: ChunkCoord, _pos: BlockPos, _block: Block) {}
}
