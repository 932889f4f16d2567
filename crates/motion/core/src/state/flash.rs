/// RGB tint of a flash overlay, each channel 0..=31 like the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlashColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl FlashColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Colored overlay fading out linearly over a number of frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlashState {
    pub color: FlashColor,
    pub level: f64,
    pub frames_left: i32,
}

impl FlashState {
    pub fn start(&mut self, color: FlashColor, power: f64, frames: i32) {
        self.color = color;
        self.level = power;
        self.frames_left = frames;
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }

    /// Advances one frame. The level reaches exactly zero on the last frame.
    pub fn update(&mut self) {
        if self.frames_left > 0 {
            self.level -= self.level / f64::from(self.frames_left);
            self.frames_left -= 1;
            if self.frames_left <= 0 {
                self.level = 0.0;
            }
        }
    }
}
