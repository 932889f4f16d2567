//! Sprite frame and spin advancement, run at the end of every update.

use crate::config::MotionConfig;
use crate::state::CharacterState;

/// Advances the animation by one tick.
pub fn advance(state: &mut CharacterState) {
    let speed = MotionConfig::speed_index(state.move_speed);

    if state.is_spinning() {
        state.animation.count += 1;
        if state.animation.count >= MotionConfig::SPIN_LIMITS[speed] {
            state.sprite_facing = state.sprite_facing.turn_right();
            state.animation.count = 0;
        }
        return;
    }

    if state.is_anim_paused() || state.is_jumping() {
        state.animation.reset();
        return;
    }

    if !state.is_animated() {
        return;
    }

    let stationary = MotionConfig::STATIONARY_LIMITS[speed];
    let continuous = MotionConfig::CONTINUOUS_LIMITS[speed];
    let walking = state.stop_count == 0;

    if state.animation.kind.is_continuous()
        || walking
        || state.animation.frame.is_side()
        || state.animation.count < stationary - 1
    {
        state.animation.count += 1;
    }

    if state.animation.count >= continuous || (walking && state.animation.count >= stationary) {
        state.animation.next_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Facing;
    use crate::state::{AnimFrame, AnimType, MovementFlags, Position};

    #[test]
    fn spin_rotates_clockwise_at_the_speed_limit() {
        let mut state = CharacterState::player(Position::ORIGIN)
            .with_anim_type(AnimType::Spin)
            .with_facing(Facing::Up);

        for _ in 0..6 {
            advance(&mut state);
        }
        assert_eq!(state.sprite_facing, Facing::Up);

        advance(&mut state);
        assert_eq!(state.sprite_facing, Facing::Right);
        assert_eq!(state.animation.count, 0);
    }

    #[test]
    fn walking_steps_at_the_stationary_limit() {
        let mut state = CharacterState::player(Position::ORIGIN);
        state.stop_count = 0;

        for _ in 0..4 {
            advance(&mut state);
        }
        assert_eq!(state.animation.frame, AnimFrame::Middle);

        advance(&mut state);
        assert_eq!(state.animation.frame, AnimFrame::Right);
        assert_eq!(state.animation.count, 0);
    }

    #[test]
    fn idle_character_settles_on_a_neutral_frame() {
        let mut state = CharacterState::player(Position::ORIGIN);
        state.stop_count = 10;

        for _ in 0..50 {
            advance(&mut state);
        }
        assert_eq!(state.animation.frame, AnimFrame::Middle);
        assert_eq!(state.animation.count, 4);
    }

    #[test]
    fn continuous_animation_runs_while_idle() {
        let mut state = CharacterState::player(Position::ORIGIN).with_anim_type(AnimType::Continuous);
        state.stop_count = 10;

        for _ in 0..7 {
            advance(&mut state);
        }
        assert_eq!(state.animation.frame, AnimFrame::Right);
    }

    #[test]
    fn jumping_resets_to_the_neutral_pose() {
        let mut state = CharacterState::player(Position::ORIGIN);
        state.animation.frame = AnimFrame::Left;
        state.animation.count = 3;
        state.flags.insert(MovementFlags::JUMPING);

        advance(&mut state);
        assert_eq!(state.animation.frame, AnimFrame::Middle);
        assert_eq!(state.animation.count, 0);
    }

    #[test]
    fn fixed_graphic_never_changes() {
        let mut state = CharacterState::player(Position::ORIGIN).with_anim_type(AnimType::FixedGraphic);
        state.stop_count = 0;
        state.animation.count = 2;

        for _ in 0..20 {
            advance(&mut state);
        }
        assert_eq!(state.animation.frame, AnimFrame::Middle);
        assert_eq!(state.animation.count, 2);
    }
}
