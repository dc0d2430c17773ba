//! Error handling for the session engine.

pub mod domain;

pub use domain::{DomainError, NotFoundKind, StateKind, ValidationKind};
