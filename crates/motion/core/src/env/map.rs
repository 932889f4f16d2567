use crate::state::Position;

/// Read-only view of the current map's geometry.
///
/// Coordinates are tiles; the display offset is in sub-tile units
/// (`MotionConfig::TILE_UNIT` per tile), matching the sprite coordinates
/// produced by [`crate::geometry::CoordinateProjector`].
pub trait MapGeometry {
    fn dimensions(&self) -> MapDimensions;

    fn loops_horizontally(&self) -> bool;

    fn loops_vertically(&self) -> bool;

    /// Scroll origin, horizontal.
    fn display_x(&self) -> i32 {
        0
    }

    /// Scroll origin, vertical.
    fn display_y(&self) -> i32 {
        0
    }

    /// Pixels a sprite standing on `position` sinks into bush terrain.
    fn bush_depth(&self, _position: Position) -> i32 {
        0
    }

    fn width(&self) -> i32 {
        self.dimensions().width as i32
    }

    fn height(&self) -> i32 {
        self.dimensions().height as i32
    }

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Wraps a column onto the map when it loops horizontally.
    fn round_x(&self, x: i32) -> i32 {
        if self.loops_horizontally() && self.width() > 0 {
            x.rem_euclid(self.width())
        } else {
            x
        }
    }

    /// Wraps a row onto the map when it loops vertically.
    fn round_y(&self, y: i32) -> i32 {
        if self.loops_vertically() && self.height() > 0 {
            y.rem_euclid(self.height())
        } else {
            y
        }
    }

    /// Signed column delta `from - to`, folded across the seam on a looping map.
    fn distance_x(&self, from: i32, to: i32) -> i32 {
        fold_distance(from - to, self.width(), self.loops_horizontally())
    }

    /// Signed row delta `from - to`, folded across the seam on a looping map.
    fn distance_y(&self, from: i32, to: i32) -> i32 {
        fold_distance(from - to, self.height(), self.loops_vertically())
    }
}

fn fold_distance(delta: i32, extent: i32, looping: bool) -> i32 {
    if !looping || delta.abs() <= extent / 2 {
        return delta;
    }
    if delta > 0 {
        delta - extent
    } else {
        delta + extent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}
