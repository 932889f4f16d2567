//! Direction tables and screen projection. Stateless.
mod direction;
mod projection;

pub use direction::{Direction, Facing};
pub use projection::{CoordinateProjector, DrawPriority, jump_height, positive_modulo};
