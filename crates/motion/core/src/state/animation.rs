//! Sprite animation state.

/// How a sprite animates, as authored on the event page.
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
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum AnimType {
    /// Steps while moving, settles when halted.
    #[default]
    NonContinuous = 0,
    /// Steps all the time.
    Continuous = 1,
    FixedNonContinuous = 2,
    FixedContinuous = 3,
    /// Single still frame.
    FixedGraphic = 4,
    /// Rotates through the four facings.
    Spin = 5,
    StepFrameFix = 6,
}

impl AnimType {
    pub fn is_spinning(self) -> bool {
        self == AnimType::Spin
    }

    pub fn is_continuous(self) -> bool {
        matches!(self, AnimType::Continuous | AnimType::FixedContinuous)
    }

    /// Types whose frame never changes.
    pub fn is_frozen(self) -> bool {
        matches!(self, AnimType::FixedGraphic | AnimType::StepFrameFix)
    }
}

/// Column of the walking cycle shown on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::FromRepr)]
#[repr(u8)]
pub enum AnimFrame {
    Left = 0,
    /// Neutral pose.
    #[default]
    Middle = 1,
    Right = 2,
    Middle2 = 3,
}

impl AnimFrame {
    pub fn next(self) -> Self {
        match self {
            AnimFrame::Left => AnimFrame::Middle,
            AnimFrame::Middle => AnimFrame::Right,
            AnimFrame::Right => AnimFrame::Middle2,
            AnimFrame::Middle2 => AnimFrame::Left,
        }
    }

    /// The two stepping poses, as opposed to the neutral ones.
    pub fn is_side(self) -> bool {
        matches!(self, AnimFrame::Left | AnimFrame::Right)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub kind: AnimType,
    pub frame: AnimFrame,
    /// Ticks since the frame last changed.
    pub count: i32,
}

impl AnimationState {
    pub fn new(kind: AnimType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Back to the neutral pose.
    pub fn reset(&mut self) {
        self.count = 0;
        self.frame = AnimFrame::Middle;
    }

    pub fn next_frame(&mut self) {
        self.frame = self.frame.next();
        self.count = 0;
    }
}
