//! World views lent to the motion engine during a tick.
mod gate;
mod map;

pub use gate::{Occupant, OccupancyGate};
pub use map::GridMap;
