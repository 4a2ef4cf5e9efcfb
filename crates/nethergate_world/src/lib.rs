//! # NETHERGATE World
//!
//! Block storage as the portal engine sees it.
//!
//! ## Core Components
//!
//! - `Block` / `BlockPos`: block types and integer positions
//! - `Chunk` / `ChunkCoord`: 16x16x256 storage units with per-block tags
//! - `World`: the trait the engine reads and writes through
//! - `ChunkedWorld`: thread-safe in-memory world
//! - `Dimension`: decides whether frames may ignite
//!
//! ## Example
//!
//! ```rust,ignore
//! use nethergate_world::{Block, BlockPos, ChunkedWorld, Dimension, World};
//!
//! let world = ChunkedWorld::new(Dimension::Overworld);
//! world.ensure_loaded_around(0, 0, 1);
//! world.set_block(BlockPos::new(0, 64, 0), Block::OBSIDIAN);
//! assert!(world.get_block(BlockPos::new(0, 64, 0)).is_obsidian());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod chunk;
pub mod dimension;
pub mod error;
pub mod world;

pub use block::{Block, BlockPos};
pub use chunk::{Chunk, ChunkCoord, ChunkSnapshot, BLOCKS_PER_CHUNK, CHUNK_HEIGHT, CHUNK_SIZE};
pub use dimension::Dimension;
pub use error::{WorldError, WorldResult};
pub use world::{ChunkedWorld, World, WorldSnapshot};
