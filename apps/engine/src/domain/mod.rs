//! Domain layer: pure session logic types and helpers.

pub mod player;
pub mod project;
pub mod prompts;
pub mod season;
pub mod session;
pub mod shuffle;
pub mod snapshot;
pub mod week_deck;

#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use player::Player;
pub use project::{Project, ProjectStatus, ProjectTick};
pub use prompts::{SeasonalPrompts, WeekEntry};
pub use season::Season;
pub use session::{GameSession, WeekReport, WeekStart};
pub use snapshot::{restore, snapshot, SessionSnapshot, SNAPSHOT_VERSION};
pub use week_deck::WeekDeck;
