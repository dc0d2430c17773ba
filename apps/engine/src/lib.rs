#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use domain::{
    GameSession, Player, Project, ProjectStatus, ProjectTick, SeasonalPrompts, Season,
    SessionSnapshot, WeekDeck, WeekEntry, WeekReport, WeekStart,
};
pub use errors::{DomainError, NotFoundKind, StateKind, ValidationKind};
pub use infra::prompts::load_prompts;
pub use infra::snapshot_store::{SnapshotStore, StorageError};
pub use state::registry::SessionRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::test_logging::init();
}
