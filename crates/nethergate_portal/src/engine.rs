//! # Portal Engine
//!
//! Entry points called by event-handling glue. The engine owns the
//! registry; share it between callbacks with an `Arc`.
//!
//! ## Control Flow
//!
//! ```text
//! fire placed ──> discover ──> FrameDiscoverer ──> fill_frame ──> registry
//!                                                      │
//!                                                      └──> portal blocks (tagged)
//! block broken ─> is_still_valid ──(false)──> break_frame ──> effects
//! ```

use nethergate_world::{BlockPos, World};

use crate::config::PortalConfig;
use crate::discovery::FrameDiscoverer;
use crate::error::{PortalError, PortalResult};
use crate::frame::{geometry_is_obsidian_frame, is_interior_clear};
use crate::generator::{create_frame, fill_interior, load_around};
use crate::geometry::FrameGeometry;
use crate::registry::{PortalId, PortalRegistry, PortalState};

/// The nether portal frame engine.
pub struct PortalEngine {
    config: PortalConfig,
    discoverer: FrameDiscoverer,
    registry: PortalRegistry,
}

impl PortalEngine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::InvalidConfig` if the bounds are inconsistent.
    pub fn new(config: PortalConfig) -> PortalResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            discoverer: FrameDiscoverer::new(config),
            registry: PortalRegistry::new(),
        })
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// The portal registry.
    #[must_use]
    pub const fn registry(&self) -> &PortalRegistry {
        &self.registry
    }

    /// Looks for a frame around `seed` without registering anything.
    #[must_use]
    pub fn find_frame(&self, world: &dyn World, seed: BlockPos) -> Option<FrameGeometry> {
        self.discoverer.find(world, seed)
    }

    /// Discovers the frame around `seed` and lights it.
    ///
    /// Returns the id of the lit portal, or `None` when there is no legal
    /// frame around the seed or the dimension forbids portals.
    pub fn discover(&self, world: &dyn World, seed: BlockPos) -> Option<PortalId> {
        let geometry = self.find_frame(world, seed)?;
        match self.fill_frame(world, &geometry) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!("Frame found at {} but not lit: {}", seed, e);
                None
            }
        }
    }

    /// Builds a complete portal: loads terrain, writes the obsidian ring and
    /// fills the interior.
    ///
    /// The portal is registered in `Generating` state before the first
    /// write, so validity checks fired by those writes pass. A geometry that
    /// is already registered keeps its id. If chunk loading fails a fresh
    /// record is removed again and its id stays retired; an existing record
    /// goes back to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for frames outside the configured size, or
    /// `ChunkLoad` if the surrounding terrain could not be loaded.
    pub fn generate(&self, world: &dyn World, geometry: &FrameGeometry) -> PortalResult<PortalId> {
        self.config.check(geometry)?;

        let existing = self.registry.find_by_geometry(geometry);
        let id = match existing {
            Some(id) => {
                self.registry.set_state(id, PortalState::Generating);
                id
            }
            None => self.registry.register(*geometry, PortalState::Generating),
        };

        if let Err(e) = load_around(world, geometry, self.config.chunk_load_radius) {
            if existing.is_some() {
                self.registry.set_state(id, PortalState::Idle);
            } else {
                self.registry.remove(id);
            }
            tracing::warn!("Generation of {} aborted: {}", id, e);
            return Err(e);
        }

        create_frame(world, geometry);
        fill_interior(world, geometry, id);
        self.registry.set_state(id, PortalState::Idle);

        tracing::info!(
            "Generated {} ({}x{} along {}) at {}",
            id,
            geometry.width(),
            geometry.height(),
            geometry.axis(),
            geometry.bottom_right()
        );
        Ok(id)
    }

    /// Fills an existing obsidian frame with portal material.
    ///
    /// Re-filling a frame that is already registered reuses its id, so
    /// repeated calls change nothing.
    ///
    /// # Errors
    ///
    /// Returns why the frame cannot be lit: dimension, size, obstructed
    /// interior or incomplete perimeter.
    pub fn fill_frame(&self, world: &dyn World, geometry: &FrameGeometry) -> PortalResult<PortalId> {
        if !world.dimension().allows_portal_ignition() {
            return Err(PortalError::DimensionForbidsPortals);
        }
        self.config.check(geometry)?;
        if !is_interior_clear(world, geometry.min(), geometry.max(), geometry.axis()) {
            return Err(PortalError::InteriorObstructed);
        }
        if !geometry_is_obsidian_frame(world, geometry) {
            return Err(PortalError::FrameIncomplete);
        }

        let id = match self.registry.find_by_geometry(geometry) {
            Some(id) => {
                self.registry.set_state(id, PortalState::Generating);
                id
            }
            None => {
                let id = self.registry.register(*geometry, PortalState::Generating);
                tracing::info!(
                    "Lit {} ({}x{} along {}) at {}",
                    id,
                    geometry.width(),
                    geometry.height(),
                    geometry.axis(),
                    geometry.bottom_right()
                );
                id
            }
        };

        fill_interior(world, geometry, id);
        self.registry.set_state(id, PortalState::Idle);
        Ok(id)
    }

    /// Boolean form of [`PortalEngine::fill_frame`].
    pub fn try_fill_frame(&self, world: &dyn World, geometry: &FrameGeometry) -> bool {
        self.fill_frame(world, geometry).is_ok()
    }
}

impl Default for PortalEngine {
    fn default() -> Self {
        let config = PortalConfig::default();
        Self {
            config,
            discoverer: FrameDiscoverer::new(config),
            registry: PortalRegistry::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use nethergate_world::{Block, ChunkCoord, ChunkedWorld, Dimension};

    fn frame() -> FrameGeometry {
        FrameGeometry::from_corners(Axis::AlongX, BlockPos::new(0, 64, 0), BlockPos::new(3, 68, 0))
    }

    fn built(dimension: Dimension) -> ChunkedWorld {
        let world = ChunkedWorld::new(dimension);
        world.ensure_loaded_around(0, 0, 2);
        world.fill(frame().perimeter(), Block::OBSIDIAN);
        world
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PortalConfig {
            min_width: 10,
            max_width: 2,
            ..PortalConfig::default()
        };
        assert!(PortalEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_keeps_its_config() {
        let config = PortalConfig {
            max_width: 6,
            chunk_load_radius: 0,
            ..PortalConfig::default()
        };
        let engine = PortalEngine::new(config).unwrap();
        assert_eq!(engine.config(), &config);
        assert_eq!(PortalEngine::default().config(), &PortalConfig::default());
    }

    #[test]
    fn test_discover_lights_frame() {
        let world = built(Dimension::Overworld);
        let engine = PortalEngine::default();
        let id = engine.discover(&world, BlockPos::new(1, 66, 0)).unwrap();
        assert_eq!(engine.registry().get(id).map(|p| p.geometry), Some(frame()));
        for pos in frame().interior() {
            assert_eq!(world.block_tag(pos), Some(id.raw()));
        }
    }

    #[test]
    fn test_discover_refused_in_end() {
        let world = built(Dimension::End);
        let engine = PortalEngine::default();
        assert!(engine.discover(&world, BlockPos::new(1, 66, 0)).is_none());
        assert!(engine.registry().is_empty());
        assert!(world.get_block(BlockPos::new(1, 66, 0)).is_air());
    }

    #[test]
    fn test_fill_frame_reasons() {
        let engine = PortalEngine::default();

        let end = built(Dimension::End);
        assert!(matches!(
            engine.fill_frame(&end, &frame()),
            Err(PortalError::DimensionForbidsPortals)
        ));

        let world = built(Dimension::Nether);
        world.set_block(BlockPos::new(2, 65, 0), Block::DIRT);
        assert!(matches!(
            engine.fill_frame(&world, &frame()),
            Err(PortalError::InteriorObstructed)
        ));

        world.set_block(BlockPos::new(2, 65, 0), Block::AIR);
        world.set_block(BlockPos::new(0, 66, 0), Block::AIR);
        assert!(matches!(
            engine.fill_frame(&world, &frame()),
            Err(PortalError::FrameIncomplete)
        ));

        let tiny = FrameGeometry::from_corners(Axis::AlongX, BlockPos::new(0, 64, 0), BlockPos::new(2, 68, 0));
        assert!(matches!(
            engine.fill_frame(&world, &tiny),
            Err(PortalError::OutOfBounds { width: 3, height: 5 })
        ));
    }

    #[test]
    fn test_generate_registers_after_writes() {
        let world = ChunkedWorld::default();
        let engine = PortalEngine::default();
        let g = FrameGeometry::from_corners(Axis::AlongZ, BlockPos::new(40, 64, 40), BlockPos::new(40, 68, 43));
        let id = engine.generate(&world, &g).unwrap();
        let portal = engine.registry().get(id).unwrap();
        assert_eq!(portal.state, PortalState::Idle);
        assert!(geometry_is_obsidian_frame(&world, &g));
        assert!(world.get_block(BlockPos::new(40, 66, 41)).is_nether_portal());
    }

    #[test]
    fn test_generate_twice_reuses_id() {
        let world = ChunkedWorld::default();
        let engine = PortalEngine::default();
        let first = engine.generate(&world, &frame()).unwrap();
        let second = engine.generate(&world, &frame()).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.registry().len(), 1);
        assert_eq!(engine.registry().get(first).map(|p| p.state), Some(PortalState::Idle));
        for pos in frame().interior() {
            assert_eq!(world.block_tag(pos), Some(first.raw()));
        }
    }

    #[test]
    fn test_failed_regenerate_keeps_existing_portal() {
        let world = ChunkedWorld::default();
        let engine = PortalEngine::default();
        let id = engine.generate(&world, &frame()).unwrap();

        let broken = ChunkedWorld::default();
        broken.mark_unavailable(ChunkCoord::new(0, 0));
        assert!(engine.generate(&broken, &frame()).is_err());
        assert_eq!(engine.registry().get(id).map(|p| p.state), Some(PortalState::Idle));
        assert_eq!(engine.registry().find_by_geometry(&frame()), Some(id));
    }

    #[test]
    fn test_generate_chunk_failure_leaves_no_portal() {
        let world = ChunkedWorld::default();
        world.mark_unavailable(ChunkCoord::new(0, 0));
        let engine = PortalEngine::default();
        let err = engine.generate(&world, &frame()).unwrap_err();
        assert!(matches!(err, PortalError::ChunkLoad { .. }));
        assert!(engine.registry().is_empty());

        // The failed attempt's id stays retired.
        let ok_world = ChunkedWorld::default();
        let id = engine.generate(&ok_world, &frame()).unwrap();
        assert_eq!(id.raw(), 1);
    }

    #[test]
    fn test_generate_rejects_oversized_frame() {
        let world = ChunkedWorld::default();
        let engine = PortalEngine::default();
        let g = FrameGeometry::from_corners(Axis::AlongX, BlockPos::new(0, 64, 0), BlockPos::new(40, 68, 0));
        assert!(matches!(
            engine.generate(&world, &g),
            Err(PortalError::OutOfBounds { .. })
        ));
        assert_eq!(world.loaded_chunk_count(), 0);
    }
}
