//! Direction tables.
//!
//! Discriminants match the legacy numbering (and the move-route command codes
//! 0..=7), so the lookup tables below are indexed by `as usize`.
//! Screen coordinates: Y grows downward.

/// Logical heading of a character: 4 cardinals followed by 4 diagonals.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    #[default]
    Down = 2,
    Left = 3,
    UpRight = 4,
    DownRight = 5,
    DownLeft = 6,
    UpLeft = 7,
}

const DX: [i32; 8] = [0, 1, 0, -1, 1, 1, -1, -1];
const DY: [i32; 8] = [-1, 0, 1, 0, -1, 1, 1, -1];

const REVERSED: [Direction; 8] = [
    Direction::Down,
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::DownLeft,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownRight,
];

impl Direction {
    pub const fn dx(self) -> i32 {
        DX[self as usize]
    }

    pub const fn dy(self) -> i32 {
        DY[self as usize]
    }

    pub const fn delta(self) -> (i32, i32) {
        (self.dx(), self.dy())
    }

    pub const fn reverse(self) -> Self {
        REVERSED[self as usize]
    }

    pub const fn is_diagonal(self) -> bool {
        self as u8 >= 4
    }

    /// The cardinal facing of a non-diagonal direction.
    pub const fn cardinal(self) -> Option<Facing> {
        match self {
            Direction::Up => Some(Facing::Up),
            Direction::Right => Some(Facing::Right),
            Direction::Down => Some(Facing::Down),
            Direction::Left => Some(Facing::Left),
            _ => None,
        }
    }

    /// Splits a diagonal into its (vertical, horizontal) facings.
    ///
    /// `[UR, DR, DL, UL] -> ([U, D, D, U], [R, R, L, L])`
    pub const fn axis_facings(self) -> Option<(Facing, Facing)> {
        match self {
            Direction::UpRight => Some((Facing::Up, Facing::Right)),
            Direction::DownRight => Some((Facing::Down, Facing::Right)),
            Direction::DownLeft => Some((Facing::Down, Facing::Left)),
            Direction::UpLeft => Some((Facing::Up, Facing::Left)),
            _ => None,
        }
    }
}

impl From<Facing> for Direction {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::Up => Direction::Up,
            Facing::Right => Direction::Right,
            Facing::Down => Direction::Down,
            Facing::Left => Direction::Left,
        }
    }
}

/// Visual facing of a sprite. Always one of the four cardinals.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Facing {
    Up = 0,
    Right = 1,
    #[default]
    Down = 2,
    Left = 3,
}

impl Facing {
    /// Facing for any integer, wrapped into the four cardinals.
    pub fn wrapping(index: u32) -> Self {
        match index % 4 {
            0 => Facing::Up,
            1 => Facing::Right,
            2 => Facing::Down,
            _ => Facing::Left,
        }
    }

    /// 90° clockwise. Also the spin animation's next pose.
    pub fn turn_right(self) -> Self {
        Self::wrapping(self as u32 + 1)
    }

    pub fn turn_left(self) -> Self {
        Self::wrapping(self as u32 + 3)
    }

    pub fn turn_around(self) -> Self {
        Self::wrapping(self as u32 + 2)
    }

    /// Facing after stepping in `direction`.
    ///
    /// Cardinal steps face the step. Diagonal steps keep the facing if it
    /// already matches one axis of the diagonal, otherwise the facing is
    /// reversed (not rotated toward the step).
    pub fn after_step(self, direction: Direction) -> Self {
        match direction.axis_facings() {
            None => direction.cardinal().unwrap_or(self),
            Some((vertical, horizontal)) => {
                if self != vertical && self != horizontal {
                    self.turn_around()
                } else {
                    self
                }
            }
        }
    }

    /// Cardinal heading of a jump displacement; vertical wins ties.
    pub fn of_displacement(dx: i32, dy: i32) -> Self {
        if dy.abs() >= dx.abs() {
            if dy >= 0 { Facing::Down } else { Facing::Up }
        } else if dx >= 0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}
