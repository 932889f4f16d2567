//! Per-tick character update and move-route interpretation.
//!
//! The [`CharacterEngine`] is the only writer of a [`CharacterState`] during
//! a tick. It borrows the character and the [`TickContext`] for the duration
//! of one update; cross-character reads go through the context's oracles.

mod animation;
mod error;
mod interpreter;
mod movement;

#[cfg(test)]
mod test_support;

pub use animation::advance as advance_animation;
pub use error::RouteError;
pub use interpreter::RouteSlot;

use crate::env::TickContext;
use crate::state::CharacterState;

/// Drives one character against its surroundings.
pub struct CharacterEngine<'a, 'e> {
    state: &'a mut CharacterState,
    ctx: &'a mut TickContext<'e>,
}

impl<'a, 'e> CharacterEngine<'a, 'e> {
    pub fn new(state: &'a mut CharacterState, ctx: &'a mut TickContext<'e>) -> Self {
        Self { state, ctx }
    }

    pub fn state(&self) -> &CharacterState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut CharacterState {
        self.state
    }
}
