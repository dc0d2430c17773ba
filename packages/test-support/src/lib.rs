//! Test support utilities for generating unique test data
//!
//! This crate provides utilities to help generate unique test data using ULIDs
//! to ensure test isolation and avoid conflicts between test runs, plus the
//! unified test logging initializer shared by unit and integration tests.

use ulid::Ulid;

pub mod test_logging;

/// Generate a unique string with the given prefix
///
/// # Arguments
/// * `prefix` - The prefix to use for the unique string
///
/// # Returns
/// A unique string in the format `{prefix}-{ulid}`
///
/// # Examples
/// ```
/// use test_support::unique_str;
///
/// let id1 = unique_str("channel");
/// let id2 = unique_str("channel");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("channel-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player name
///
/// # Returns
/// A unique name in the format `player-{ulid}`, usable anywhere a roster
/// expects a distinct participant.
///
/// # Examples
/// ```
/// use test_support::unique_player_name;
///
/// let name1 = unique_player_name();
/// let name2 = unique_player_name();
/// assert_ne!(name1, name2);
/// assert!(name1.starts_with("player-"));
/// ```
pub fn unique_player_name() -> String {
    unique_str("player")
}
