//! # NETHERGATE Portal Engine
//!
//! Decides whether blocks form an obsidian portal frame, finds frames from
//! a single seed block, builds and fills them, and tracks live portals.
//!
//! ## Architecture Rules
//!
//! 1. **Bounded search** - discovery never looks further than the size bounds
//! 2. **Pure reads** - validation and discovery never write to the world
//! 3. **Retired ids** - a portal id is never handed out twice
//!
//! ## Core Components
//!
//! - `FrameGeometry`: axis plus two canonical corners
//! - `FrameDiscoverer`: bounded breadth-first frame finder
//! - `PortalRegistry`: id to portal record, behind one lock
//! - `PortalEngine`: the entry points event glue calls
//!
//! ## Example
//!
//! ```rust,ignore
//! use nethergate_portal::{NoEffects, PortalEngine};
//! use nethergate_world::{BlockPos, ChunkedWorld};
//!
//! let world = ChunkedWorld::default();
//! let engine = PortalEngine::default();
//! if let Some(id) = engine.discover(&world, BlockPos::new(1, 65, 0)) {
//!     if !engine.is_still_valid(&world, id) {
//!         engine.break_frame(&world, &NoEffects, id);
//!     }
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod axis;
pub mod config;
pub mod discovery;
pub mod effects;
pub mod engine;
pub mod error;
pub mod frame;
pub mod generator;
pub mod geometry;
pub mod lifecycle;
pub mod registry;

pub use axis::Axis;
pub use config::{PortalConfig, MAXIMUM_HEIGHT, MAXIMUM_WIDTH, MINIMUM_HEIGHT, MINIMUM_WIDTH};
pub use discovery::FrameDiscoverer;
pub use effects::{EffectSink, NoEffects};
pub use engine::PortalEngine;
pub use error::{PortalError, PortalResult};
pub use frame::{geometry_is_obsidian_frame, is_interior_clear, is_obsidian_frame};
pub use generator::{create_frame, fill_interior, load_around};
pub use geometry::{Center, FrameGeometry};
pub use registry::{Portal, PortalId, PortalRegistry, PortalState};
