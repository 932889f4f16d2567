//! Reference map owner for the motion engine.
//!
//! `motion-core` moves one character at a time and reaches the world only
//! through its oracle traits. This crate supplies a complete owner for a
//! single map so the engine can be driven end to end:
//! - [`runtime`] hosts [`MapRuntime`], the per-tick driver and character
//!   lookup
//! - [`oracle`] provides the grid map and the occupancy-aware collision gate
//! - [`pending`] and [`effects`] collect what move routes change outside
//!   the character
//! - [`scenario`] replays data-driven setups loaded by `motion-content`
pub mod effects;
pub mod error;
pub mod oracle;
pub mod pending;
pub mod runtime;
pub mod scenario;

pub use effects::MapEffects;
pub use error::{Result, RuntimeError};
pub use oracle::{GridMap, OccupancyGate, Occupant};
pub use pending::PendingMoves;
pub use runtime::{CharacterSnapshot, MapRuntime, MapRuntimeBuilder, RuntimeConfig, TickReport};
pub use scenario::Scenario;
