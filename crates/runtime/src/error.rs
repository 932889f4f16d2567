use motion_core::{CharacterId, ErrorSeverity, MotionError, OracleError};

/// Failures of the map owner itself. Route-level trouble stays inside the
/// tick and is reported as [`motion_core::RouteError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Lookup(#[from] OracleError),

    #[error("character {0} is not on this map")]
    CharacterNotFound(CharacterId),

    #[error("route '{0}' is not defined")]
    UnknownRoute(String),

    #[error("a player is already on this map")]
    DuplicatePlayer,

    #[error("map must have a non-zero size, got {width}x{height}")]
    EmptyMap { width: u32, height: u32 },
}

impl MotionError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Lookup(err) => err.severity(),
            Self::CharacterNotFound(_) | Self::UnknownRoute(_) => ErrorSeverity::Validation,
            Self::DuplicatePlayer | Self::EmptyMap { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Lookup(err) => err.error_code(),
            Self::CharacterNotFound(_) => "RUNTIME_CHARACTER_NOT_FOUND",
            Self::UnknownRoute(_) => "RUNTIME_UNKNOWN_ROUTE",
            Self::DuplicatePlayer => "RUNTIME_DUPLICATE_PLAYER",
            Self::EmptyMap { .. } => "RUNTIME_EMPTY_MAP",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
