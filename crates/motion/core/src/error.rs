//! Common error infrastructure for motion-core.
//!
//! Almost nothing in the engine fails: blocked moves return `false` and
//! out-of-range tunables are clamped. The few real errors (unknown route
//! commands under the `Fail` policy, strict decoding, lookups of characters
//! that do not exist) share the classification defined here.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The simulation keeps running; local state was already repaired.
    ///
    /// Examples: route cancelled on an unknown command
    Recoverable,

    /// Invalid input, reject without retry.
    ///
    /// Examples: unknown command code under strict decoding, missing character
    Validation,

    /// Unexpected state inconsistency that should be investigated.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Common trait for all motion-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait MotionError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
