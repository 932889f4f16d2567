//! Errors raised by oracle lookups.

use crate::error::{ErrorSeverity, MotionError};
use crate::state::VehicleKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("no event with id {0}")]
    EventNotFound(u32),

    #[error("vehicle {0} is not on this map")]
    VehicleNotFound(VehicleKind),

    #[error("player is not on this map")]
    PlayerNotFound,

    /// "This event" was requested outside of an event context.
    #[error("no calling event to resolve")]
    NoContextEvent,
}

impl MotionError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EventNotFound(_) => "ORACLE_EVENT_NOT_FOUND",
            Self::VehicleNotFound(_) => "ORACLE_VEHICLE_NOT_FOUND",
            Self::PlayerNotFound => "ORACLE_PLAYER_NOT_FOUND",
            Self::NoContextEvent => "ORACLE_NO_CONTEXT_EVENT",
        }
    }
}
