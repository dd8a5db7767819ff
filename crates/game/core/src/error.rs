//! Common error infrastructure for siege-core.
//!
//! Domain-specific errors (e.g., [`crate::SpawnRejection`]) live next to the
//! contracts that produce them. This module provides the shared classification
//! used by the strategy layer to decide whether a failure is worth retrying.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed against a different state
///   (e.g. after resources accrue) or with a different candidate
/// - **Validation**: the request is malformed for this board and never succeeds
/// - **Internal**: collaborator returned something inconsistent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - resample or retry later.
    ///
    /// Examples: tile occupied, not enough resources
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: location outside the arena, unknown unit shorthand
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all siege errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
