use crate::error::{ErrorSeverity, MotionError};

/// Failures surfaced by the route interpreter.
///
/// The interpreter has already repaired the character (route cancelled)
/// by the time one of these is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown move command code {code} at index {index}")]
    UnknownCommand { code: i32, index: usize },
}

impl MotionError for RouteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCommand { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand { .. } => "ROUTE_UNKNOWN_COMMAND",
        }
    }
}
