//! Move-route interpreter.
//!
//! Runs commands from the route's cursor for as long as the character's
//! gate stays open. Movement commands close the gate by starting a step or
//! a jump; the command's [`CommandGroup`] then sets the pacing threshold.
//! Everything else takes effect immediately and the loop continues.

use crate::config::UnknownCommandPolicy;
use crate::engine::{CharacterEngine, RouteError};
use crate::geometry::{Direction, Facing};
use crate::route::{CommandGroup, FaceTarget, MoveCommand, MoveRoute, MoveTarget};
use crate::state::AutonomousMovement;

/// Which of the character's routes is being run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RouteSlot {
    /// Route forced by a script; finishing or cancelling it restores the
    /// character's own movement.
    Forced,
    /// The character's own custom route.
    Autonomous,
}

impl CharacterEngine<'_, '_> {
    /// Runs the route in `slot` from its stored cursor and writes the cursor
    /// back.
    pub fn advance_route(&mut self, slot: RouteSlot) -> Result<(), RouteError> {
        let Some((route, mut index)) = self.route_cursor(slot) else {
            return Ok(());
        };
        let outcome = self.run_route(slot, &route, &mut index);
        self.store_route_index(slot, index);
        outcome
    }

    fn route_cursor(&self, slot: RouteSlot) -> Option<(std::sync::Arc<MoveRoute>, usize)> {
        match slot {
            RouteSlot::Forced => self
                .state
                .active_route
                .as_ref()
                .map(|active| (active.route.clone(), active.index)),
            RouteSlot::Autonomous => match &self.state.autonomous {
                AutonomousMovement::Custom { route, index } => Some((route.clone(), *index)),
                AutonomousMovement::Stationary => None,
            },
        }
    }

    /// A route cancelled during the run has no cursor left to update.
    fn store_route_index(&mut self, slot: RouteSlot, index: usize) {
        match slot {
            RouteSlot::Forced => {
                if let Some(active) = self.state.active_route.as_mut() {
                    active.index = index;
                }
            }
            RouteSlot::Autonomous => {
                if let AutonomousMovement::Custom { index: cursor, .. } = &mut self.state.autonomous
                {
                    *cursor = index;
                }
            }
        }
    }

    fn run_route(
        &mut self,
        slot: RouteSlot,
        route: &MoveRoute,
        index: &mut usize,
    ) -> Result<(), RouteError> {
        if route.is_empty() {
            return Ok(());
        }
        let forced = slot == RouteSlot::Forced;
        if forced && !self.state.is_move_route_overwritten() {
            return Ok(());
        }

        let start = *index;
        loop {
            if !self.state.is_stopping() || self.state.is_stop_count_active() {
                return Ok(());
            }

            if *index >= route.len() {
                if forced {
                    self.mark_route_repeated();
                }
                if !route.repeat {
                    if forced {
                        self.cancel_move_route();
                    }
                    return Ok(());
                }
                *index = 0;
                if *index == start {
                    return Ok(());
                }
            }

            let previous_direction = self.state.direction;
            let previous_facing = self.state.sprite_facing;
            let command = &route.commands[*index];
            tracing::trace!(character = %self.state.id, index = *index, ?command, "route command");

            match command {
                MoveCommand::Move(target) => {
                    let direction = self.resolve_move(*target);
                    self.state.direction = direction;
                    self.move_direction(direction);

                    if self.state.is_stopping() {
                        if route.skippable {
                            self.state.direction = previous_direction;
                            self.state.sprite_facing = previous_facing;
                        } else {
                            return Ok(());
                        }
                    }
                    if *target == MoveTarget::Forward {
                        self.state.sprite_facing = previous_facing;
                    }
                }
                MoveCommand::Turn(target) => {
                    let facing = self.resolve_turn(*target);
                    self.state.face(facing);
                }
                MoveCommand::BeginJump => {
                    let begin = *index;
                    let closed = self.begin_route_jump(route, index);
                    if self.state.is_stopping() {
                        if route.skippable {
                            self.state.direction = previous_direction;
                            self.state.sprite_facing = previous_facing;
                        } else {
                            *index = begin;
                            return Ok(());
                        }
                    }
                    if !closed {
                        // The scan consumed the rest of the list.
                        continue;
                    }
                }
                MoveCommand::Unknown { code } => {
                    let code = *code;
                    match self.ctx.config.unknown_command {
                        UnknownCommandPolicy::Skip => {
                            tracing::warn!(
                                character = %self.state.id,
                                code,
                                index = *index,
                                "skipping unknown move command"
                            );
                        }
                        UnknownCommandPolicy::Stall => {
                            tracing::debug!(
                                character = %self.state.id,
                                code,
                                index = *index,
                                "route stalled on unknown move command"
                            );
                            return Ok(());
                        }
                        UnknownCommandPolicy::Fail => {
                            let failed_at = *index;
                            self.abandon_route(slot);
                            return Err(RouteError::UnknownCommand {
                                code,
                                index: failed_at,
                            });
                        }
                    }
                }
                other => self.run_immediate(other),
            }

            match command.group() {
                CommandGroup::Move => self.state.set_max_stop_count_for_step(),
                CommandGroup::Turn => {
                    self.state.set_max_stop_count_for_turn();
                    self.state.stop_count = 0;
                }
                CommandGroup::Other => {}
            }

            *index += 1;
            if *index == start {
                return Ok(());
            }
        }
    }

    /// Commands that take effect without touching the gate or position.
    fn run_immediate(&mut self, command: &MoveCommand) {
        let state = &mut *self.state;
        match command {
            MoveCommand::Wait => state.wait(),
            MoveCommand::LockFacing => state.set_facing_locked(true),
            MoveCommand::UnlockFacing => state.set_facing_locked(false),
            MoveCommand::IncreaseSpeed => state.set_move_speed(state.move_speed.saturating_add(1)),
            MoveCommand::DecreaseSpeed => state.set_move_speed(state.move_speed.saturating_sub(1)),
            MoveCommand::IncreaseFrequency => {
                state.set_move_frequency(state.move_frequency.saturating_add(1))
            }
            MoveCommand::DecreaseFrequency => {
                state.set_move_frequency(state.move_frequency.saturating_sub(1))
            }
            MoveCommand::SwitchOn(switch_id) => {
                self.ctx.effects.set_switch(*switch_id, true);
                self.ctx.effects.request_refresh();
            }
            MoveCommand::SwitchOff(switch_id) => {
                self.ctx.effects.set_switch(*switch_id, false);
                self.ctx.effects.request_refresh();
            }
            MoveCommand::ChangeGraphic(sprite) => state.sprite = sprite.clone(),
            MoveCommand::PlaySound(sound) => {
                if !sound.is_silent() {
                    self.ctx.effects.play_sound(sound);
                }
            }
            MoveCommand::WalkEverywhereOn => state.set_route_through(true),
            MoveCommand::WalkEverywhereOff => state.set_route_through(false),
            MoveCommand::StopAnimation => state.set_anim_paused(true),
            MoveCommand::StartAnimation => state.set_anim_paused(false),
            MoveCommand::IncreaseTransparency => {
                state.set_transparency(i32::from(state.transparency) + 1)
            }
            MoveCommand::DecreaseTransparency => {
                state.set_transparency(i32::from(state.transparency) - 1)
            }
            MoveCommand::EndJump
            | MoveCommand::Move(_)
            | MoveCommand::Turn(_)
            | MoveCommand::BeginJump
            | MoveCommand::Unknown { .. } => {}
        }
    }

    /// Sums the moves between `BeginJump` and `EndJump` into one jump.
    ///
    /// Turns inside the block only change the direction used by later moves.
    /// On return `index` points at the `EndJump`, or at the end of the list
    /// when the block is never closed (reported as `false`).
    fn begin_route_jump(&mut self, route: &MoveRoute, index: &mut usize) -> bool {
        let (mut jdx, mut jdy) = (0, 0);
        let mut closed = false;

        *index += 1;
        while *index < route.len() {
            match &route.commands[*index] {
                MoveCommand::Move(target) => {
                    let direction = self.resolve_move(*target);
                    self.state.direction = direction;
                    jdx += direction.dx();
                    jdy += direction.dy();
                }
                MoveCommand::Turn(target) => {
                    self.state.direction = self.resolve_turn(*target).into();
                }
                MoveCommand::EndJump => {
                    closed = true;
                    break;
                }
                _ => {}
            }
            *index += 1;
        }

        let origin = self.state.position;
        if self.jump(origin.x + jdx, origin.y + jdy) {
            self.state.set_max_stop_count_for_step();
        }
        closed
    }

    fn resolve_move(&mut self, target: MoveTarget) -> Direction {
        match target {
            MoveTarget::Toward(direction) => direction,
            MoveTarget::Random => self.random_facing().into(),
            MoveTarget::TowardTarget => self.facing_toward_target().into(),
            MoveTarget::AwayFromTarget => self.facing_away_from_target().into(),
            MoveTarget::Forward => self.state.direction,
        }
    }

    /// Cardinal that a turn command settles on.
    fn resolve_turn(&mut self, target: FaceTarget) -> Facing {
        let facing = self.state.sprite_facing;
        match target {
            FaceTarget::Face(facing) => facing,
            FaceTarget::TurnRight => facing.turn_right(),
            FaceTarget::TurnLeft => facing.turn_left(),
            FaceTarget::TurnAround => facing.turn_around(),
            FaceTarget::TurnRandomSide => self.random_side(),
            FaceTarget::Random => self.random_facing(),
            FaceTarget::TowardTarget => self.facing_toward_target(),
            FaceTarget::AwayFromTarget => self.facing_away_from_target(),
        }
    }

    fn mark_route_repeated(&mut self) {
        if let Some(active) = self.state.active_route.as_mut() {
            active.repeated = true;
        }
    }

    fn abandon_route(&mut self, slot: RouteSlot) {
        match slot {
            RouteSlot::Forced => self.cancel_move_route(),
            RouteSlot::Autonomous => self.state.autonomous = AutonomousMovement::Stationary,
        }
    }
}
