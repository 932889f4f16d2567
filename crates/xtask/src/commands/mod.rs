//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod lint;
mod replay;
mod routes;

pub use lint::Lint;
pub use replay::Replay;
pub use routes::Routes;
