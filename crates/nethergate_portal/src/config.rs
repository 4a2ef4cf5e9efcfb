//! # Engine Configuration
//!
//! Size bounds and chunk-loading radius, loaded once at startup from TOML.
//! Every field is optional; missing fields take the vanilla values.
//!
//! All four bounds count interior cells only, the obsidian ring excluded.
//! With the defaults the smallest frame is 4x5 and the largest 24x24.
//! The maximums also cap how far the discovery flood walks from its seed.
//!
//! ```toml
//! min_width = 2
//! min_height = 3
//! max_width = 22
//! max_height = 22
//! chunk_load_radius = 1
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{PortalError, PortalResult};
use crate::geometry::FrameGeometry;

/// Smallest interior width of a portal.
pub const MINIMUM_WIDTH: i32 = 2;
/// Smallest interior height of a portal.
pub const MINIMUM_HEIGHT: i32 = 3;
/// Flood-fill and interior width bound.
pub const MAXIMUM_WIDTH: i32 = 22;
/// Flood-fill and interior height bound.
pub const MAXIMUM_HEIGHT: i32 = 22;

/// Portal engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    /// Smallest interior width.
    pub min_width: i32,
    /// Smallest interior height.
    pub min_height: i32,
    /// Largest interior width; also the flood-fill reach along the axis.
    pub max_width: i32,
    /// Largest interior height; also the flood-fill reach vertically.
    pub max_height: i32,
    /// Radius, in chunks, loaded around each frame corner before generation.
    pub chunk_load_radius: i32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            min_width: MINIMUM_WIDTH,
            min_height: MINIMUM_HEIGHT,
            max_width: MAXIMUM_WIDTH,
            max_height: MAXIMUM_HEIGHT,
            chunk_load_radius: 1,
        }
    }
}

impl PortalConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns error if the document is malformed or the bounds are inconsistent.
    pub fn from_toml_str(source: &str) -> PortalResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| PortalError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or its content is invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> PortalResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks that the bounds make sense.
    ///
    /// # Errors
    ///
    /// Returns error describing the first inconsistent field.
    pub fn validate(&self) -> PortalResult<()> {
        if self.min_width < 1 || self.min_height < 1 {
            return Err(PortalError::InvalidConfig(format!(
                "minimum interior must be at least 1x1, got {}x{}",
                self.min_width, self.min_height
            )));
        }
        if self.min_width > self.max_width {
            return Err(PortalError::InvalidConfig(format!(
                "min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            )));
        }
        if self.min_height > self.max_height {
            return Err(PortalError::InvalidConfig(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            )));
        }
        if self.chunk_load_radius < 0 {
            return Err(PortalError::InvalidConfig(format!(
                "chunk_load_radius must not be negative, got {}",
                self.chunk_load_radius
            )));
        }
        Ok(())
    }

    /// Returns true if the frame's interior fits the configured bounds.
    #[must_use]
    pub fn admits(&self, geometry: &FrameGeometry) -> bool {
        let width = geometry.interior_width();
        let height = geometry.interior_height();
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }

    /// Fails with `OutOfBounds` unless the frame fits.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::OutOfBounds` with the frame-inclusive size.
    pub fn check(&self, geometry: &FrameGeometry) -> PortalResult<()> {
        if self.admits(geometry) {
            Ok(())
        } else {
            Err(PortalError::OutOfBounds {
                width: geometry.width(),
                height: geometry.height(),
            })
        }
    }
}
