//! # Dimensions
//!
//! The dimension a world belongs to decides whether obsidian frames may
//! ignite into portals.

/// Dimension category of a world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The overworld.
    #[default]
    Overworld,
    /// The nether.
    Nether,
    /// The end. Frames never ignite here.
    End,
}

impl Dimension {
    /// Returns true if an obsidian frame may be filled with portal material.
    #[inline]
    #[must_use]
    pub const fn allows_portal_ignition(self) -> bool {
        !matches!(self, Self::End)
    }
}
