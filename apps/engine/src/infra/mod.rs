//! Infrastructure: file-backed persistence and prompt loading.

pub mod prompts;
pub mod snapshot_store;

pub use prompts::load_prompts;
pub use snapshot_store::{SnapshotStore, StorageError};
