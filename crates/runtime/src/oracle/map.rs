//! Tile grid served through [`motion_core::MapGeometry`].
use std::collections::{HashMap, HashSet};

use motion_content::MapSpec;
use motion_core::{MapDimensions, MapGeometry, MotionConfig, Position};

use crate::error::{Result, RuntimeError};

/// Static passability and bush data for one map.
///
/// Blocked and bush tiles are stored sparsely; every other tile inside the
/// bounds is open ground.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    loop_horizontal: bool,
    loop_vertical: bool,
    blocked: HashSet<Position>,
    bush: HashMap<Position, i32>,
    display: (i32, i32),
}

impl GridMap {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RuntimeError::EmptyMap { width, height });
        }
        Ok(Self {
            dimensions: MapDimensions::new(width, height),
            loop_horizontal: false,
            loop_vertical: false,
            blocked: HashSet::new(),
            bush: HashMap::new(),
            display: (0, 0),
        })
    }

    pub fn from_spec(spec: &MapSpec) -> Result<Self> {
        let map = Self::new(spec.width, spec.height)?
            .looping(spec.loop_horizontal, spec.loop_vertical)
            .with_blocked(spec.blocked.iter().map(|&(x, y)| Position::new(x, y)));
        Ok(spec.bush.iter().fold(map, |map, &(x, y, depth)| {
            map.with_bush(Position::new(x, y), depth)
        }))
    }

    pub fn looping(mut self, horizontal: bool, vertical: bool) -> Self {
        self.loop_horizontal = horizontal;
        self.loop_vertical = vertical;
        self
    }

    pub fn with_blocked(mut self, tiles: impl IntoIterator<Item = Position>) -> Self {
        self.blocked.extend(tiles);
        self
    }

    pub fn with_bush(mut self, position: Position, depth: i32) -> Self {
        self.bush.insert(position, depth);
        self
    }

    /// Scrolls the view so `position` sits at the top-left corner.
    pub fn scroll_to(&mut self, position: Position) {
        self.display = (
            position.x * MotionConfig::TILE_UNIT,
            position.y * MotionConfig::TILE_UNIT,
        );
    }

    /// Wraps `position` onto the map along its looping axes.
    pub fn wrap(&self, position: Position) -> Position {
        Position::new(self.round_x(position.x), self.round_y(position.y))
    }

    /// Inside the bounds after wrapping and not a blocked tile.
    pub fn is_passable(&self, position: Position) -> bool {
        let position = self.wrap(position);
        self.contains(position) && !self.blocked.contains(&position)
    }
}

impl MapGeometry for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn loops_horizontally(&self) -> bool {
        self.loop_horizontal
    }

    fn loops_vertically(&self) -> bool {
        self.loop_vertical
    }

    fn display_x(&self) -> i32 {
        self.display.0
    }

    fn display_y(&self) -> i32 {
        self.display.1
    }

    fn bush_depth(&self, position: Position) -> i32 {
        self.bush.get(&self.wrap(position)).copied().unwrap_or(0)
    }
}
