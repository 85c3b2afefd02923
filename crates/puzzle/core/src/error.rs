//! Common error infrastructure for puzzle-core.
//!
//! Domain-specific errors (`GeometryError`, `MatchError`, ...) live next to the
//! rules that produce them. This module only provides the shared severity
//! classification and the trait every error implements.

/// Severity level of an error, used to decide how a host reacts to it.
///
/// - **Recoverable**: the input is ignored and the session continues
/// - **Validation**: the input or setup data is malformed and must be fixed
/// - **Internal**: an inconsistency in engine state that indicates a bug
/// - **Fatal**: a broken setup invariant; the session cannot continue safely
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error, for example a drag target off the selection line.
    Recoverable,

    /// Validation error, for example a grid with a zero dimension.
    Validation,

    /// Internal error, unexpected state inconsistency.
    Internal,

    /// Fatal error, for example more solves than provisioned colors.
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or broken setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all puzzle-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact
pub trait PuzzleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
