//! # Frame Geometry
//!
//! A frame is described by its axis and two opposite corners. Corners are
//! stored canonically: `bottom_right` holds the lowest Y and the largest
//! ordinate along the axis, `top_left` the highest Y and the smallest.
//!
//! Width and height are frame-inclusive: a 4x5 obsidian ring has width 4
//! and height 5, and encloses a 2x3 interior.

use std::collections::BTreeSet;

use nethergate_world::{BlockPos, ChunkCoord};

use crate::axis::Axis;

/// Arithmetic centre of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Center {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

/// Axis-aligned portal frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    axis: Axis,
    bottom_right: BlockPos,
    top_left: BlockPos,
}

impl FrameGeometry {
    /// Builds a geometry from any two opposite corners of the frame.
    ///
    /// Corners may be given in any order. The cross-axis ordinate is taken
    /// from the smaller of the two; a frame is flat, so they normally agree.
    #[must_use]
    pub fn from_corners(axis: Axis, a: BlockPos, b: BlockPos) -> Self {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
        let (min_z, max_z) = (a.z.min(b.z), a.z.max(b.z));

        let (bottom_right, top_left) = match axis {
            Axis::AlongX => (
                BlockPos::new(max_x, min_y, min_z),
                BlockPos::new(min_x, max_y, min_z),
            ),
            Axis::AlongZ => (
                BlockPos::new(min_x, min_y, max_z),
                BlockPos::new(min_x, max_y, min_z),
            ),
        };

        Self {
            axis,
            bottom_right,
            top_left,
        }
    }

    /// Builds the frame enclosing an interior bounding box.
    ///
    /// The box is grown by one block on each frame side (top, bottom, left,
    /// right along the axis).
    #[must_use]
    pub fn enclosing(axis: Axis, interior_min: BlockPos, interior_max: BlockPos) -> Self {
        let bottom_right = axis.step(interior_max, 1);
        let top_left = axis.step(interior_min, -1);
        Self::from_corners(
            axis,
            BlockPos::new(bottom_right.x, interior_min.y - 1, bottom_right.z),
            BlockPos::new(top_left.x, interior_max.y + 1, top_left.z),
        )
    }

    /// Frame axis.
    #[inline]
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Bottom-right frame corner.
    #[inline]
    #[must_use]
    pub const fn bottom_right(&self) -> BlockPos {
        self.bottom_right
    }

    /// Top-left frame corner.
    #[inline]
    #[must_use]
    pub const fn top_left(&self) -> BlockPos {
        self.top_left
    }

    /// Component-wise minimum corner.
    #[must_use]
    pub fn min(&self) -> BlockPos {
        BlockPos::new(
            self.bottom_right.x.min(self.top_left.x),
            self.bottom_right.y,
            self.bottom_right.z.min(self.top_left.z),
        )
    }

    /// Component-wise maximum corner.
    #[must_use]
    pub fn max(&self) -> BlockPos {
        BlockPos::new(
            self.bottom_right.x.max(self.top_left.x),
            self.top_left.y,
            self.bottom_right.z.max(self.top_left.z),
        )
    }

    /// Frame-inclusive width along the axis.
    #[must_use]
    pub fn width(&self) -> i32 {
        span(self.axis, self.min(), self.max())
    }

    /// Frame-inclusive height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.top_left.y - self.bottom_right.y + 1
    }

    /// Width of the interior (frame excluded).
    #[must_use]
    pub fn interior_width(&self) -> i32 {
        self.width() - 2
    }

    /// Height of the interior (frame excluded).
    #[must_use]
    pub const fn interior_height(&self) -> i32 {
        self.height() - 2
    }

    /// Mean of the two corners. Used for nearest-portal queries.
    #[must_use]
    pub fn center(&self) -> Center {
        Center {
            x: (f64::from(self.bottom_right.x) + f64::from(self.top_left.x)) / 2.0,
            y: (f64::from(self.bottom_right.y) + f64::from(self.top_left.y)) / 2.0,
            z: (f64::from(self.bottom_right.z) + f64::from(self.top_left.z)) / 2.0,
        }
    }

    /// Interior cells, column by column along the axis.
    pub fn interior(&self) -> impl Iterator<Item = BlockPos> {
        interior_cells(self.axis, self.min(), self.max())
    }

    /// Every frame block, corners included.
    #[must_use]
    pub fn perimeter(&self) -> Vec<BlockPos> {
        let min = self.min();
        let max_y = self.top_left.y;
        let width = self.width();
        let height = self.height();

        let mut blocks = Vec::with_capacity((2 * (width + height)).max(0) as usize);
        for i in 0..width {
            let column = self.axis.step(min, i);
            blocks.push(BlockPos::new(column.x, min.y, column.z));
            blocks.push(BlockPos::new(column.x, max_y, column.z));
        }
        let right = self.axis.step(min, width - 1);
        for j in 1..height - 1 {
            blocks.push(min.offset(0, j, 0));
            blocks.push(right.offset(0, j, 0));
        }
        blocks
    }

    /// Chunks within `radius` of the chunks holding either corner.
    #[must_use]
    pub fn chunks_around_corners(&self, radius: i32) -> BTreeSet<ChunkCoord> {
        let mut chunks = BTreeSet::new();
        for corner in [self.top_left, self.bottom_right] {
            chunks.extend(corner.chunk().square_around(radius));
        }
        chunks
    }
}

/// Width between two positions along an axis, both ends included.
#[inline]
#[must_use]
pub fn span(axis: Axis, min: BlockPos, max: BlockPos) -> i32 {
    (max.x - min.x) * axis.x_step() + (max.z - min.z) * axis.z_step() + 1
}

/// Cells strictly inside the frame whose corners are `min` and `max`.
pub fn interior_cells(axis: Axis, min: BlockPos, max: BlockPos) -> impl Iterator<Item = BlockPos> {
    let width = span(axis, min, max);
    (1..width - 1).flat_map(move |i| {
        let column = axis.step(min, i);
        (min.y + 1..max.y).map(move |y| BlockPos::new(column.x, y, column.z))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_order_does_not_matter() {
        let a = BlockPos::new(10, 64, 5);
        let b = BlockPos::new(13, 68, 5);
        let g1 = FrameGeometry::from_corners(Axis::AlongX, a, b);
        let g2 = FrameGeometry::from_corners(Axis::AlongX, b, a);
        assert_eq!(g1, g2);
        assert_eq!(g1.bottom_right(), BlockPos::new(13, 64, 5));
        assert_eq!(g1.top_left(), BlockPos::new(10, 68, 5));
        assert!(g1.bottom_right().y <= g1.top_left().y);
    }

    #[test]
    fn test_width_and_height_are_frame_inclusive() {
        let g = FrameGeometry::from_corners(
            Axis::AlongZ,
            BlockPos::new(0, 10, 0),
            BlockPos::new(0, 14, 3),
        );
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 5);
        assert_eq!(g.interior_width(), 2);
        assert_eq!(g.interior_height(), 3);
    }

    #[test]
    fn test_degenerate_corners() {
        let p = BlockPos::new(1, 1, 1);
        let g = FrameGeometry::from_corners(Axis::AlongX, p, p);
        assert_eq!(g.width(), 1);
        assert_eq!(g.height(), 1);
        assert_eq!(g.interior().count(), 0);
    }

    #[test]
    fn test_enclosing_grows_one_block_each_side() {
        let g = FrameGeometry::enclosing(
            Axis::AlongX,
            BlockPos::new(1, 65, 0),
            BlockPos::new(2, 67, 0),
        );
        assert_eq!(g.bottom_right(), BlockPos::new(3, 64, 0));
        assert_eq!(g.top_left(), BlockPos::new(0, 68, 0));

        let g = FrameGeometry::enclosing(
            Axis::AlongZ,
            BlockPos::new(4, 65, 1),
            BlockPos::new(4, 67, 2),
        );
        assert_eq!(g.bottom_right(), BlockPos::new(4, 64, 3));
        assert_eq!(g.top_left(), BlockPos::new(4, 68, 0));
    }

    #[test]
    fn test_interior_and_perimeter_partition_the_rectangle() {
        let g = FrameGeometry::from_corners(
            Axis::AlongX,
            BlockPos::new(0, 0, 7),
            BlockPos::new(5, 6, 7),
        );
        let interior: Vec<_> = g.interior().collect();
        let perimeter = g.perimeter();
        assert_eq!(interior.len(), 4 * 5);
        assert_eq!(perimeter.len(), 2 * 6 + 2 * 5);
        assert_eq!(interior.len() + perimeter.len(), 6 * 7);
        for cell in &interior {
            assert!(!perimeter.contains(cell));
            assert_eq!(cell.z, 7);
        }
    }

    #[test]
    fn test_center_is_corner_mean() {
        let g = FrameGeometry::from_corners(
            Axis::AlongX,
            BlockPos::new(0, 64, 2),
            BlockPos::new(3, 68, 2),
        );
        let c = g.center();
        assert!((c.x - 1.5).abs() < f64::EPSILON);
        assert!((c.y - 66.0).abs() < f64::EPSILON);
        assert!((c.z - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chunks_around_corners_dedup() {
        let g = FrameGeometry::from_corners(
            Axis::AlongX,
            BlockPos::new(1, 64, 1),
            BlockPos::new(4, 68, 1),
        );
        assert_eq!(g.chunks_around_corners(1).len(), 9);

        let g = FrameGeometry::from_corners(
            Axis::AlongX,
            BlockPos::new(14, 64, 1),
            BlockPos::new(17, 68, 1),
        );
        assert_eq!(g.chunks_around_corners(1).len(), 12);
    }
}
