//! # Frame Axis
//!
//! A frame stands in a vertical plane that runs either along X or along Z.
//! Each axis carries unit step multipliers so every geometry formula is
//! written once: `width = dx * x_step + dz * z_step`.

use nethergate_world::BlockPos;

/// Horizontal orientation of a frame's long dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Frame plane runs along X (constant Z).
    AlongX,
    /// Frame plane runs along Z (constant X).
    AlongZ,
}

impl Axis {
    /// Both axes, in discovery priority order.
    pub const ALL: [Self; 2] = [Self::AlongX, Self::AlongZ];

    /// X step multiplier.
    #[inline]
    #[must_use]
    pub const fn x_step(self) -> i32 {
        match self {
            Self::AlongX => 1,
            Self::AlongZ => 0,
        }
    }

    /// Z step multiplier.
    #[inline]
    #[must_use]
    pub const fn z_step(self) -> i32 {
        match self {
            Self::AlongX => 0,
            Self::AlongZ => 1,
        }
    }

    /// Projects a position onto the axis: `x * x_step + z * z_step`.
    #[inline]
    #[must_use]
    pub const fn project(self, pos: BlockPos) -> i32 {
        pos.x * self.x_step() + pos.z * self.z_step()
    }

    /// Moves `pos` by `distance` blocks along the axis.
    #[inline]
    #[must_use]
    pub const fn step(self, pos: BlockPos, distance: i32) -> BlockPos {
        pos.offset(distance * self.x_step(), 0, distance * self.z_step())
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlongX => f.write_str("x"),
            Self::AlongZ => f.write_str("z"),
        }
    }
}
