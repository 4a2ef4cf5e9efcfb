//! # World Access
//!
//! The `World` trait is the only door the portal engine has into block
//! storage. `ChunkedWorld` is the in-memory implementation used by the
//! server and by tests.
//!
//! Thread-safe: reads take a shared lock on the chunk map, writes an
//! exclusive one. Region-level write ordering is the host's business.

use std::collections::{BTreeMap, HashMap, HashSet};

use parking_lot::RwLock;

use crate::block::{Block, BlockPos};
use crate::chunk::{Chunk, ChunkCoord, ChunkSnapshot, CHUNK_SIZE};
use crate::dimension::Dimension;
use crate::error::{WorldError, WorldResult};

/// Pre-allocated chunk map capacity.
const INITIAL_CHUNK_CAPACITY: usize = 256;

/// Block storage as seen by the portal engine.
pub trait World: Send + Sync {
    /// Gets the block at a position. Unloaded terrain reads as air.
    fn get_block(&self, pos: BlockPos) -> Block;

    /// Sets the block at a position, clearing any tag it carried.
    fn set_block(&self, pos: BlockPos, block: Block);

    /// Returns the tag attached to the block at a position.
    fn block_tag(&self, pos: BlockPos) -> Option<u64>;

    /// Sets the block at a position and attaches a tag to it.
    fn set_tagged_block(&self, pos: BlockPos, block: Block, tag: u64);

    /// Loads a chunk, blocking until it is ready for writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the chunk cannot be brought into memory.
    fn load_chunk(&self, coord: ChunkCoord) -> WorldResult<()>;

    /// Dimension category of this world.
    fn dimension(&self) -> Dimension;
}

/// Splits a world position into its chunk and local column coordinates.
#[inline]
fn locate(pos: BlockPos) -> (ChunkCoord, usize, usize) {
    let local_x = pos.x.rem_euclid(CHUNK_SIZE as i32) as usize;
    let local_z = pos.z.rem_euclid(CHUNK_SIZE as i32) as usize;
    (pos.chunk(), local_x, local_z)
}

/// Frozen copy of every loaded chunk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSnapshot {
    /// Chunk snapshots ordered by coordinate.
    pub chunks: BTreeMap<ChunkCoord, ChunkSnapshot>,
}

/// In-memory chunked world.
pub struct ChunkedWorld {
    /// Chunks indexed by coordinate.
    chunks: RwLock<HashMap<ChunkCoord, Chunk>>,
    /// Chunks whose loading fails (simulated storage faults).
    unavailable: RwLock<HashSet<ChunkCoord>>,
    /// Dimension of this world.
    dimension: Dimension,
}

impl ChunkedWorld {
    /// Creates a new empty world in the given dimension.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            chunks: RwLock::new(HashMap::with_capacity(INITIAL_CHUNK_CAPACITY)),
            unavailable: RwLock::new(HashSet::new()),
            dimension,
        }
    }

    /// Returns true if the chunk is in memory.
    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.read().contains_key(&coord)
    }

    /// Returns the number of loaded chunks.
    #[must_use]
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.read().len()
    }

    /// Ensures chunks are loaded around a block position.
    ///
    /// Chunks marked unavailable are skipped. Use for spawn/setup.
    pub fn ensure_loaded_around(&self, block_x: i32, block_z: i32, radius: i32) {
        let center = ChunkCoord::from_block_pos(block_x, block_z);
        for coord in center.square_around(radius) {
            // Unavailable chunks stay unloaded; the failure is already logged.
            let _ = self.load_chunk(coord);
        }
    }

    /// Makes every future `load_chunk` of this coordinate fail.
    ///
    /// The chunk is also evicted if it was loaded.
    pub fn mark_unavailable(&self, coord: ChunkCoord) {
        self.unavailable.write().insert(coord);
        self.chunks.write().remove(&coord);
    }

    /// Captures every loaded chunk for later comparison.
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            chunks: self
                .chunks
                .read()
                .iter()
                .map(|(coord, chunk)| (*coord, chunk.snapshot()))
                .collect(),
        }
    }

    /// Sets many blocks at once. Convenience for building test scenes.
    pub fn fill<I>(&self, positions: I, block: Block)
    where
        I: IntoIterator<Item = BlockPos>,
    {
        for pos in positions {
            self.set_block(pos, block);
        }
    }
}

impl Default for ChunkedWorld {
    fn default() -> Self {
        Self::new(Dimension::Overworld)
    }
}

impl World for ChunkedWorld {
    fn get_block(&self, pos: BlockPos) -> Block {
        let (coord, x, z) = locate(pos);
        self.chunks
            .read()
            .get(&coord)
            .map_or(Block::AIR, |c| c.get_block(x, pos.y, z))
    }

    fn set_block(&self, pos: BlockPos, block: Block) {
        let (coord, x, z) = locate(pos);
        let mut chunks = self.chunks.write();
        match chunks.get_mut(&coord) {
            Some(chunk) => {
                chunk.set_block(x, pos.y, z, block);
            }
            None => tracing::warn!("Dropped write at {} into unloaded chunk {}", pos, coord),
        }
    }

    fn block_tag(&self, pos: BlockPos) -> Option<u64> {
        let (coord, x, z) = locate(pos);
        self.chunks.read().get(&coord).and_then(|c| c.tag(x, pos.y, z))
    }

    fn set_tagged_block(&self, pos: BlockPos, block: Block, tag: u64) {
        let (coord, x, z) = locate(pos);
        let mut chunks = self.chunks.write();
        match chunks.get_mut(&coord) {
            Some(chunk) => {
                chunk.set_tagged_block(x, pos.y, z, block, tag);
            }
            None => tracing::warn!("Dropped tagged write at {} into unloaded chunk {}", pos, coord),
        }
    }

    fn load_chunk(&self, coord: ChunkCoord) -> WorldResult<()> {
        if self.unavailable.read().contains(&coord) {
            tracing::warn!("Chunk {} failed to load", coord);
            return Err(WorldError::ChunkUnavailable { chunk: coord });
        }
        self.chunks
            .write()
            .entry(coord)
            .or_insert_with(|| Chunk::new(coord));
        Ok(())
    }

    fn dimension(&self) -> Dimension {
        self.dimension
    }
}
