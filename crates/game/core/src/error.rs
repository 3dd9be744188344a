//! Common error infrastructure for scorekeeper-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (`CommandError`, `StateError`) are defined
//! next to the code that produces them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure source has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so frontends know whether
//!   to show a hint to the score-keeper or to report a bug
//! - **Stable Codes**: Every variant exposes a static code usable in logs and scripts

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: The command does not apply to the current state; the
///   score-keeper can correct the input and try again
/// - **Internal**: A state invariant was broken; indicates a bug in the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input for the current state. Nothing was changed.
    ///
    /// Examples: submitting without a wager, switching rounds mid-clue
    Validation,

    /// Unexpected state inconsistency detected after a transition.
    ///
    /// Examples: wager text left over in board mode, stale wager error
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all scorekeeper-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
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
