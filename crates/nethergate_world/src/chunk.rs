//! # Chunk Storage
//!
//! World data is organized into fixed-size chunks so that only the terrain
//! around activity needs to exist in memory.
//!
//! ## Chunk Format
//!
//! Chunks are 16x16x256 blocks (width x depth x height), stored flat as
//! `[y][z][x]`. Each block may additionally carry a `u64` tag; the portal
//! engine uses it to point a portal block back at the portal that owns it.

use std::collections::{BTreeMap, HashMap};

use crate::block::Block;

/// Chunk width/depth in blocks.
pub const CHUNK_SIZE: usize = 16;

/// Chunk height in blocks.
pub const CHUNK_HEIGHT: usize = 256;

/// Total blocks per chunk.
pub const BLOCKS_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_HEIGHT;

/// Chunk coordinate (identifies a chunk in the world grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not blocks).
    pub x: i32,
    /// Z coordinate (in chunks, not blocks).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts world block coordinates to chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn from_block_pos(block_x: i32, block_z: i32) -> Self {
        Self {
            x: block_x.div_euclid(CHUNK_SIZE as i32),
            z: block_z.div_euclid(CHUNK_SIZE as i32),
        }
    }

    /// Returns every chunk within `radius` chunks of this one (a square).
    #[must_use]
    pub fn square_around(self, radius: i32) -> Vec<Self> {
        let side = (2 * radius + 1).max(0) as usize;
        let mut coords = Vec::with_capacity(side * side);
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                coords.push(Self::new(self.x + dx, self.z + dz));
            }
        }
        coords
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.z)
    }
}

/// A chunk of world data.
#[derive(Clone)]
pub struct Chunk {
    /// Chunk position in the world.
    pub coord: ChunkCoord,
    /// Block data (indexed as [y][z][x], flattened).
    blocks: Box<[Block]>,
    /// Per-block tags keyed by flat index.
    tags: HashMap<usize, u64>,
    /// Whether this chunk has been modified since loading.
    pub modified: bool,
}

impl Chunk {
    /// Creates a new empty (all air) chunk at the given coordinates.
    #[must_use]
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![Block::AIR; BLOCKS_PER_CHUNK].into_boxed_slice(),
            tags: HashMap::new(),
            modified: false,
        }
    }

    /// Flat index for local coordinates, `None` when out of range.
    #[inline]
    fn index(x: usize, y: i32, z: usize) -> Option<usize> {
        let y = usize::try_from(y).ok()?;
        if x < CHUNK_SIZE && y < CHUNK_HEIGHT && z < CHUNK_SIZE {
            Some((y * CHUNK_SIZE + z) * CHUNK_SIZE + x)
        } else {
            None
        }
    }

    /// Gets a block at local coordinates. Out-of-range reads return air.
    ///
    /// # Arguments
    ///
    /// * `x` - Local X (0-15)
    /// * `y` - World Y level (0-255)
    /// * `z` - Local Z (0-15)
    #[inline]
    #[must_use]
    pub fn get_block(&self, x: usize, y: i32, z: usize) -> Block {
        Self::index(x, y, z).map_or(Block::AIR, |i| self.blocks[i])
    }

    /// Sets a block at local coordinates, clearing any tag it carried.
    ///
    /// Returns false if the coordinates are out of range.
    #[inline]
    pub fn set_block(&mut self, x: usize, y: i32, z: usize, block: Block) -> bool {
        let Some(i) = Self::index(x, y, z) else {
            return false;
        };
        self.blocks[i] = block;
        self.tags.remove(&i);
        self.modified = true;
        true
    }

    /// Returns the tag attached to the block at local coordinates.
    #[inline]
    #[must_use]
    pub fn tag(&self, x: usize, y: i32, z: usize) -> Option<u64> {
        Self::index(x, y, z).and_then(|i| self.tags.get(&i).copied())
    }

    /// Sets a block and attaches a tag to it.
    ///
    /// Returns false if the coordinates are out of range.
    pub fn set_tagged_block(&mut self, x: usize, y: i32, z: usize, block: Block, tag: u64) -> bool {
        let Some(i) = Self::index(x, y, z) else {
            return false;
        };
        self.blocks[i] = block;
        self.tags.insert(i, tag);
        self.modified = true;
        true
    }

    /// Number of tagged blocks in this chunk.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Raw view of the block storage.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice::<Block, u8>(&self.blocks)
    }

    /// Captures blocks and tags for later comparison.
    #[must_use]
    pub fn snapshot(&self) -> ChunkSnapshot {
        ChunkSnapshot {
            blocks: self.as_bytes().to_vec(),
            tags: self.tags.iter().map(|(&i, &t)| (i, t)).collect(),
        }
    }
}

/// Frozen copy of one chunk's blocks and tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkSnapshot {
    /// Raw block bytes.
    pub blocks: Vec<u8>,
    /// Tags keyed by flat block index.
    pub tags: BTreeMap<usize, u64>,
}
