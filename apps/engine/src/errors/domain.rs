//! Domain-level error type used across the session core.
//!
//! This error type is chat-platform- and storage-agnostic. Domain-expected
//! failures (duplicate registration, unregistered player, out-of-range
//! project index, empty contempt balance) are ordinary return values, never
//! errors; these variants cover malformed input and operations invalid for
//! the current phase.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Malformed-input kinds, rejected before any mutation
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    BlankResourceName,
    BlankProjectName,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Project,
    Other(String),
}

/// Operation-invalid-for-current-phase kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    EmptyRoster,
    SeasonExhausted,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Operation invalid for the session's current phase
    State(StateKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::State(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::State(kind, detail.into())
    }
}
