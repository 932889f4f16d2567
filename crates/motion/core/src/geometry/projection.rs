//! Tile + interpolation state to screen pixels.
//!
//! Sprite coordinates are in sub-tile units (`TILE_UNIT` per tile); screen
//! coordinates are pixels (`TILE_SIZE` per tile) relative to the display
//! origin.

use crate::config::MotionConfig;
use crate::env::MapGeometry;
use crate::state::{CharacterState, Layer};

const TILE_UNIT: i32 = MotionConfig::TILE_UNIT;
const TILE_SIZE: i32 = MotionConfig::TILE_SIZE;

/// Base draw depth of each character band, from the legacy renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum DrawPriority {
    EventsBelow = 15 << 24,
    Player = 20 << 24,
    EventsAbove = 30 << 24,
    EventsFlying = 40 << 24,
}

impl DrawPriority {
    pub fn of(character: &CharacterState) -> Self {
        if character.is_flying() {
            return Self::EventsFlying;
        }
        match character.layer {
            Layer::Same => Self::Player,
            Layer::Below => Self::EventsBelow,
            Layer::Above => Self::EventsAbove,
        }
    }

    pub const fn base(self) -> i32 {
        self as i32
    }
}

/// Pixel height of the jump arc for the given interpolation counter.
///
/// Rises for the first half of the jump and falls for the second, capped at
/// 16 pixels.
pub fn jump_height(remaining_step: i32) -> i32 {
    let half = TILE_UNIT / 2;
    let r = if remaining_step > half {
        TILE_UNIT - remaining_step
    } else {
        remaining_step
    } / 8;
    if r < 5 {
        r * 2
    } else if r < 13 {
        r + 4
    } else {
        16
    }
}

/// Remainder with the sign of the divisor. `modulus` must be nonzero.
pub fn positive_modulo(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}

/// Projects characters onto the screen of one map.
#[derive(Clone, Copy)]
pub struct CoordinateProjector<'a> {
    map: &'a dyn MapGeometry,
}

impl<'a> CoordinateProjector<'a> {
    pub fn new(map: &'a dyn MapGeometry) -> Self {
        Self { map }
    }

    pub fn sprite_x(&self, character: &CharacterState) -> i32 {
        let mut x = character.position.x * TILE_UNIT;
        if character.is_moving() {
            match character.direction.dx() {
                1 => x -= character.remaining_step,
                -1 => x += character.remaining_step,
                _ => {}
            }
        } else if character.is_jumping() {
            x -= (character.position.x - character.jump_origin.x) * character.remaining_step;
        }
        x
    }

    pub fn sprite_y(&self, character: &CharacterState) -> i32 {
        let mut y = character.position.y * TILE_UNIT;
        if character.is_moving() {
            match character.direction.dy() {
                1 => y -= character.remaining_step,
                -1 => y += character.remaining_step,
                _ => {}
            }
        } else if character.is_jumping() {
            y -= (character.position.y - character.jump_origin.y) * character.remaining_step;
        }
        y
    }

    /// Horizontal pixel of the sprite's center.
    ///
    /// With `shift`, the value is moved one map width to the right so a
    /// renderer can draw the copy beyond a looping seam.
    pub fn screen_x(&self, character: &CharacterState, shift: bool) -> i32 {
        let width = self.map.width() * TILE_SIZE;
        let mut x = self.sprite_x(character) / TILE_SIZE - self.map.display_x() / TILE_SIZE
            + TILE_SIZE;
        if self.map.loops_horizontally() && width > 0 {
            x = positive_modulo(x, width);
        }
        x -= TILE_SIZE / 2;
        if shift {
            x += width;
        }
        x
    }

    /// Vertical pixel of the sprite's feet, optionally raised by the jump arc.
    pub fn screen_y(&self, character: &CharacterState, shift: bool, apply_jump: bool) -> i32 {
        let height = self.map.height() * TILE_SIZE;
        let mut y = self.sprite_y(character) / TILE_SIZE - self.map.display_y() / TILE_SIZE
            + TILE_SIZE;
        if apply_jump {
            y -= character.jump_height();
        }
        if self.map.loops_vertically() && height > 0 {
            y = positive_modulo(y, height);
        }
        if shift {
            y += height;
        }
        y
    }

    /// Draw depth: band base plus a row term so lower sprites draw on top.
    pub fn screen_z(&self, character: &CharacterState, shift: bool) -> i32 {
        DrawPriority::of(character).base() + (self.screen_y(character, shift, false) >> 3)
    }
}
