//! Tick driver and movement primitives.

use std::sync::Arc;

use crate::config::MotionConfig;
use crate::engine::{CharacterEngine, RouteError, RouteSlot, animation};
use crate::env::{MoveKind, compute_seed};
use crate::geometry::{Direction, Facing};
use crate::route::MoveRoute;
use crate::state::{ActiveRoute, AutonomousMovement, FlashColor, MovementFlags, Position};

impl CharacterEngine<'_, '_> {
    /// Advances the character by exactly one tick.
    ///
    /// Inactive characters and characters already processed this tick are
    /// left untouched. A returned error has already been handled locally
    /// (the offending route is cancelled); the rest of the tick still runs.
    pub fn update(&mut self) -> Result<(), RouteError> {
        if !self.state.is_active() || self.state.is_processed() {
            return Ok(());
        }
        self.state.set_processed(true);

        let mut outcome = Ok(());
        if self.state.is_stopping() {
            outcome = self.update_next_movement_action();
        }
        self.state.flash.update();

        if self.state.is_stopping() {
            let scene = self.ctx.scene;
            if self.state.stop_count == 0
                || self.state.is_move_route_overwritten()
                || ((scene.continue_events || !scene.interpreter_running)
                    && !self.state.is_paused())
            {
                self.state.stop_count = self.state.stop_count.saturating_add(1);
            }
        } else if self.state.is_jumping() {
            self.update_movement(MotionConfig::jump_step(self.state.move_speed));
        } else {
            self.update_movement(MotionConfig::move_step(self.state.move_speed));
        }

        animation::advance(self.state);
        outcome
    }

    /// Runs the forced route if one is active, else the autonomous route.
    fn update_next_movement_action(&mut self) -> Result<(), RouteError> {
        if self.state.is_move_route_overwritten() {
            return self.advance_route(RouteSlot::Forced);
        }
        match self.state.autonomous {
            AutonomousMovement::Custom { .. } => self.advance_route(RouteSlot::Autonomous),
            AutonomousMovement::Stationary => Ok(()),
        }
    }

    /// Consumes `amount` of the current move or jump.
    ///
    /// Landing on a forced route that has no commands left finishes it: the
    /// route is marked repeated and rewound, and cancelled unless it repeats.
    fn update_movement(&mut self, amount: i32) {
        self.state.remaining_step -= amount;
        if self.state.remaining_step <= 0 {
            self.state.remaining_step = 0;
            self.state.flags.remove(MovementFlags::JUMPING);

            let finished = match self.state.active_route.as_mut() {
                Some(active) if active.is_exhausted() => {
                    active.repeated = true;
                    active.index = 0;
                    Some(active.route.repeat)
                }
                _ => None,
            };
            if finished == Some(false) {
                tracing::trace!(character = %self.state.id, "forced route finished on landing");
                self.cancel_move_route();
            }
        }
        self.state.stop_count = 0;
    }

    /// Teleports the character; see [`crate::state::CharacterState::move_to`].
    pub fn move_to(&mut self, map_id: u32, x: i32, y: i32) {
        self.state.move_to(map_id, x, y);
    }

    /// Starts a one-tile step in `direction`.
    ///
    /// Direction and facing change even when the step is blocked. A diagonal
    /// step succeeds when the vertical-then-horizontal or the
    /// horizontal-then-vertical pair of probes passes; every probe starts
    /// from the current tile.
    pub fn move_direction(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.state.direction = direction;
        self.state.update_facing();

        let from = self.state.position;
        let make_x = || self.make_way(MoveKind::Step, from, from.offset(dx, 0));
        let make_y = || self.make_way(MoveKind::Step, from, from.offset(0, dy));

        let moved = if dx != 0 && dy != 0 {
            (make_y() && make_x()) || (make_x() && make_y())
        } else if dx != 0 {
            make_x()
        } else if dy != 0 {
            make_y()
        } else {
            false
        };
        if !moved {
            return false;
        }

        self.state.position = Position::new(
            self.ctx.map.round_x(from.x + dx),
            self.ctx.map.round_y(from.y + dy),
        );
        self.state.remaining_step = MotionConfig::TILE_UNIT;
        self.state.stop_count = 0;
        true
    }

    /// Starts a jump to `(x, y)`.
    ///
    /// A zero-length jump always succeeds and skips the collision gate. On a
    /// looping map an off-map landing is wrapped and the jump origin moved by
    /// the same amount, so the arc keeps its direction on screen.
    pub fn jump(&mut self, x: i32, y: i32) -> bool {
        let mut origin = self.state.position;
        let (dx, dy) = (x - origin.x, y - origin.y);

        let facing = Facing::of_displacement(dx, dy);
        self.state.direction = facing.into();
        self.state.flags.insert(MovementFlags::JUMPING);

        if dx != 0 || dy != 0 {
            if !self.state.is_facing_locked() {
                self.state.sprite_facing = facing;
            }
            if !self.make_way(MoveKind::Jump, origin, Position::new(x, y)) {
                self.state.flags.remove(MovementFlags::JUMPING);
                return false;
            }
        }

        let map = self.ctx.map;
        let mut landing = Position::new(x, y);
        if map.loops_horizontally() && (x < 0 || x >= map.width()) {
            landing.x = map.round_x(x);
            origin.x += landing.x - x;
        }
        if map.loops_vertically() && (y < 0 || y >= map.height()) {
            landing.y = map.round_y(y);
            origin.y += landing.y - y;
        }

        self.state.jump_origin = origin;
        self.state.position = landing;
        self.state.remaining_step = MotionConfig::TILE_UNIT;
        self.state.stop_count = 0;
        true
    }

    /// Overrides the character's movement with `route` at `frequency`.
    ///
    /// The route starts on the next gate check. An empty route is cancelled
    /// straight away and never reaches the pending-move registry.
    pub fn force_move_route(&mut self, route: Arc<MoveRoute>, frequency: u8) {
        if self.state.is_move_route_overwritten() {
            self.ctx.registry.remove(self.state.id);
        } else {
            self.state.original_move_frequency = self.state.move_frequency;
        }

        self.state.flags.remove(MovementFlags::PAUSED);
        self.state.stop_count = MotionConfig::FORCED_ROUTE_STOP_COUNT;
        self.state.set_move_frequency(frequency);
        let empty = route.is_empty();
        self.state.active_route = Some(ActiveRoute::new(route));
        if self.state.move_frequency != self.state.original_move_frequency {
            self.state.set_max_stop_count_for_step();
        }

        if empty {
            self.cancel_move_route();
            return;
        }

        tracing::debug!(
            character = %self.state.id,
            frequency = self.state.move_frequency,
            "move route forced"
        );
        self.ctx.registry.add(self.state.id);
    }

    /// Drops the forced route and restores the pre-route frequency.
    pub fn cancel_move_route(&mut self) {
        self.ctx.registry.remove(self.state.id);
        self.state.active_route = None;
        self.state.move_frequency = self.state.original_move_frequency;
        self.state.set_max_stop_count_for_step();
        tracing::debug!(character = %self.state.id, "move route cancelled");
    }

    /// Holds the character for the wait threshold of its frequency.
    pub fn wait(&mut self) {
        self.state.wait();
    }

    /// Starts a flash that fades out over `frames` ticks.
    pub fn flash(&mut self, color: FlashColor, power: f64, frames: i32) {
        self.state.flash(color, power, frames);
    }

    /// Points the direction 90° left of the current facing.
    pub fn turn_90_degree_left(&mut self) {
        self.state.turn_90_degree_left();
    }

    /// Points the direction 90° right of the current facing.
    pub fn turn_90_degree_right(&mut self) {
        self.state.turn_90_degree_right();
    }

    /// Points the direction opposite the current facing.
    pub fn turn_180_degree(&mut self) {
        self.state.turn_180_degree();
    }

    /// Turns 90° to a random side.
    pub fn turn_90_degree_random(&mut self) {
        self.state.direction = self.random_side().into();
    }

    /// Points the direction at one of the four cardinals at random.
    pub fn turn_random(&mut self) {
        self.state.direction = self.random_facing().into();
    }

    /// Points the direction at the target along its larger axis gap.
    pub fn turn_toward_target(&mut self) {
        self.state.direction = self.facing_toward_target().into();
    }

    /// Points the direction away from the target.
    pub fn turn_away_from_target(&mut self) {
        self.state.direction = self.facing_away_from_target().into();
    }

    // ===== helpers shared with the interpreter =====

    pub(super) fn make_way(&self, kind: MoveKind, from: Position, to: Position) -> bool {
        self.ctx.gate.make_way(&self.state.probe(kind), from, to)
    }

    pub(super) fn random_facing(&mut self) -> Facing {
        Facing::wrapping(self.roll(0, 3))
    }

    pub(super) fn random_side(&mut self) -> Facing {
        let seed = self.next_seed();
        if self.ctx.rng.chance_of(seed, 1, 2) {
            self.state.sprite_facing.turn_left()
        } else {
            self.state.sprite_facing.turn_right()
        }
    }

    /// The cardinal that closes the larger axis gap to the target.
    pub(super) fn facing_toward_target(&self) -> Facing {
        let (sx, sy) = self.distance_from_target();
        if sx.abs() > sy.abs() {
            if sx > 0 { Facing::Left } else { Facing::Right }
        } else if sy > 0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }

    pub(super) fn facing_away_from_target(&self) -> Facing {
        let (sx, sy) = self.distance_from_target();
        if sx.abs() > sy.abs() {
            if sx > 0 { Facing::Right } else { Facing::Left }
        } else if sy > 0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }

    fn distance_from_target(&self) -> (i32, i32) {
        let target = self.ctx.target.target_position();
        let map = self.ctx.map;
        (
            map.distance_x(self.state.position.x, target.x),
            map.distance_y(self.state.position.y, target.y),
        )
    }

    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.ctx.rng.range(seed, min, max)
    }

    /// Seed for this character's next draw; bumps its draw counter.
    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(
            self.ctx.config.rng_seed,
            self.ctx.frame.0,
            self.state.id.0,
            self.state.roll_count,
        );
        self.state.roll_count = self.state.roll_count.wrapping_add(1);
        seed
    }
}
