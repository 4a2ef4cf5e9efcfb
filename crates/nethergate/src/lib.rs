//! # NETHERGATE
//!
//! Event glue between a host world and the portal engine.
//!
//! ## Modules
//!
//! - `events`: block and portal event channels
//! - `portal_system`: feeds block events to the engine once per tick
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nethergate::{EventSystem, PortalSystem};
//! use nethergate::portal::{PortalConfig, PortalEngine};
//! use nethergate::world::ChunkedWorld;
//!
//! let events = EventSystem::default();
//! let engine = Arc::new(PortalEngine::new(PortalConfig::from_toml_file("portal.toml")?)?);
//! let system = PortalSystem::new(
//!     engine,
//!     Arc::new(ChunkedWorld::default()),
//!     events.block_receiver.clone(),
//!     events.portal_sender.clone(),
//! );
//! // once per tick
//! system.tick();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod events;
pub mod portal_system;

// Re-export the layers
pub use nethergate_portal as portal;
pub use nethergate_world as world;

pub use events::{ChannelEffects, EventBus, EventReceiver, EventSender, EventSystem, GameEvent};
pub use portal_system::PortalSystem;
