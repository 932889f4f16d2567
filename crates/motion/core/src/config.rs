/// Engine configuration: legacy constants plus the few runtime tunables.
///
/// The associated constants reproduce the legacy engine's tables exactly and
/// must not be tuned. The struct fields are the knobs a map owner may change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// What the route interpreter does with a command code it does not know.
    pub unknown_command: UnknownCommandPolicy,

    /// Base seed mixed into every random turn. Same seed, same replay.
    pub rng_seed: u64,
}

impl MotionConfig {
    // ===== interpolation =====
    /// Sub-tile resolution: a full tile of travel is this many units.
    pub const TILE_UNIT: i32 = 256;
    /// Screen pixels per tile.
    pub const TILE_SIZE: i32 = 16;

    // ===== tunable ranges =====
    pub const MIN_SPEED: u8 = 1;
    pub const MAX_SPEED: u8 = 6;
    pub const MIN_FREQUENCY: u8 = 1;
    pub const MAX_FREQUENCY: u8 = 8;
    pub const MAX_TRANSPARENCY: u8 = 8;

    pub const DEFAULT_SPEED: u8 = 4;
    pub const DEFAULT_FREQUENCY: u8 = 2;

    /// Stop count assigned by a forced route so it starts on the next tick.
    pub const FORCED_ROUTE_STOP_COUNT: i32 = 0xFFFF;

    // ===== per-speed tables (index = speed - 1) =====
    pub const JUMP_STEPS: [i32; 6] = [8, 12, 16, 24, 32, 64];
    pub const SPIN_LIMITS: [i32; 6] = [23, 14, 11, 7, 5, 3];
    pub const STATIONARY_LIMITS: [i32; 6] = [11, 9, 7, 5, 4, 3];
    pub const CONTINUOUS_LIMITS: [i32; 6] = [15, 11, 9, 7, 6, 5];

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RNG_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            unknown_command: UnknownCommandPolicy::default(),
            rng_seed: Self::DEFAULT_RNG_SEED,
        }
    }

    pub fn with_unknown_command(mut self, policy: UnknownCommandPolicy) -> Self {
        self.unknown_command = policy;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Interpolation units consumed per tick by a walking character.
    ///
    /// Speeds 1..=6 yield 4, 8, 16, 32, 64, 128.
    pub fn move_step(speed: u8) -> i32 {
        1 << (1 + i32::from(Self::clamp_speed(speed)))
    }

    /// Interpolation units consumed per tick by a jumping character.
    pub fn jump_step(speed: u8) -> i32 {
        Self::JUMP_STEPS[Self::speed_index(speed)]
    }

    /// Gate threshold after a step, for the given move frequency.
    pub fn stop_count_for_step(frequency: u8) -> i32 {
        if frequency >= Self::MAX_FREQUENCY {
            0
        } else {
            1 << (9 - i32::from(frequency))
        }
    }

    /// Gate threshold after a turn, for the given move frequency.
    pub fn stop_count_for_turn(frequency: u8) -> i32 {
        if frequency >= Self::MAX_FREQUENCY {
            0
        } else {
            1 << (8 - i32::from(frequency))
        }
    }

    /// Gate threshold after a wait command. Never zero, even at frequency 8.
    pub fn stop_count_for_wait(frequency: u8) -> i32 {
        20 + Self::stop_count_for_turn(frequency.min(Self::MAX_FREQUENCY - 1))
    }

    pub fn clamp_speed(speed: u8) -> u8 {
        speed.clamp(Self::MIN_SPEED, Self::MAX_SPEED)
    }

    pub fn clamp_frequency(frequency: u8) -> u8 {
        frequency.clamp(Self::MIN_FREQUENCY, Self::MAX_FREQUENCY)
    }

    pub(crate) fn speed_index(speed: u8) -> usize {
        usize::from(Self::clamp_speed(speed) - 1)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Handling of move-route command codes outside the legacy table.
///
/// The legacy engine hangs forever on such a code. None of these options
/// reproduce the hang silently: each one is logged.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnknownCommandPolicy {
    /// Treat the command as a no-op and continue with the next one.
    #[default]
    Skip,
    /// Park the route on the command; it never advances past it.
    Stall,
    /// Cancel the route and report a [`crate::RouteError`].
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_step_doubles_per_speed() {
        let steps: Vec<i32> = (1..=6).map(MotionConfig::move_step).collect();
        assert_eq!(steps, vec![4, 8, 16, 32, 64, 128]);
    }

    #[test]
    fn out_of_range_speed_is_clamped() {
        assert_eq!(MotionConfig::move_step(0), 4);
        assert_eq!(MotionConfig::jump_step(9), 64);
    }

    #[test]
    fn pacing_thresholds_follow_frequency() {
        assert_eq!(MotionConfig::stop_count_for_step(1), 256);
        assert_eq!(MotionConfig::stop_count_for_step(2), 128);
        assert_eq!(MotionConfig::stop_count_for_step(8), 0);

        assert_eq!(MotionConfig::stop_count_for_turn(1), 128);
        assert_eq!(MotionConfig::stop_count_for_turn(7), 2);
        assert_eq!(MotionConfig::stop_count_for_turn(8), 0);

        // Wait at the top frequency borrows the frequency-7 turn threshold.
        assert_eq!(MotionConfig::stop_count_for_wait(8), 22);
        assert_eq!(MotionConfig::stop_count_for_wait(3), 52);
    }

    #[test]
    fn policy_parses_from_snake_case() {
        assert_eq!(
            "stall".parse::<UnknownCommandPolicy>().unwrap(),
            UnknownCommandPolicy::Stall
        );
        assert_eq!(UnknownCommandPolicy::Fail.to_string(), "fail");
    }
}
