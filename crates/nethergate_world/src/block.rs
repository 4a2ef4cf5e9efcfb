//! # Blocks and Positions
//!
//! A block is a `u16` type ID plus `u16` metadata. Positions are integer
//! world coordinates; Y grows upwards.

use bytemuck::{Pod, Zeroable};

use crate::chunk::ChunkCoord;

/// A single block in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Block {
    /// Block type ID.
    pub id: u16,
    /// Block metadata (orientation, growth stage, etc.).
    pub meta: u16,
}

impl Block {
    /// Air block (empty).
    pub const AIR: Self = Self { id: 0, meta: 0 };
    /// Grass block.
    pub const GRASS: Self = Self { id: 1, meta: 0 };
    /// Stone block.
    pub const STONE: Self = Self { id: 2, meta: 0 };
    /// Dirt block.
    pub const DIRT: Self = Self { id: 3, meta: 0 };
    /// Obsidian, the only material a portal frame may be built from.
    pub const OBSIDIAN: Self = Self { id: 49, meta: 0 };
    /// Fire.
    pub const FIRE: Self = Self { id: 51, meta: 0 };
    /// Nether portal material.
    pub const NETHER_PORTAL: Self = Self { id: 90, meta: 0 };

    /// Creates a block with ID and metadata.
    #[inline]
    #[must_use]
    pub const fn with_meta(id: u16, meta: u16) -> Self {
        Self { id, meta }
    }

    /// Returns true if this is an air block.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.id == Self::AIR.id
    }

    /// Returns true if this block is obsidian, regardless of metadata.
    #[inline]
    #[must_use]
    pub const fn is_obsidian(self) -> bool {
        self.id == Self::OBSIDIAN.id
    }

    /// Returns true if this block is fire.
    #[inline]
    #[must_use]
    pub const fn is_fire(self) -> bool {
        self.id == Self::FIRE.id
    }

    /// Returns true if this block is nether portal material.
    #[inline]
    #[must_use]
    pub const fn is_nether_portal(self) -> bool {
        self.id == Self::NETHER_PORTAL.id
    }

    /// Returns true if the block may sit inside a portal frame.
    ///
    /// Air, fire and portal material qualify. Anything else is a wall.
    #[inline]
    #[must_use]
    pub const fn is_portal_interior(self) -> bool {
        self.is_air() || self.is_fire() || self.is_nether_portal()
    }
}

/// Integer position of a block in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (height).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this position shifted by the given deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The block directly above.
    #[inline]
    #[must_use]
    pub const fn above(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The block directly below.
    #[inline]
    #[must_use]
    pub const fn below(self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Chunk containing this position.
    #[inline]
    #[must_use]
    pub const fn chunk(self) -> ChunkCoord {
        ChunkCoord::from_block_pos(self.x, self.z)
    }

    /// The six face-adjacent positions.
    #[must_use]
    pub const fn neighbors(self) -> [Self; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.above(),
            self.below(),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
