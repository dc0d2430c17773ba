//! Single-slot snapshot persistence.
//!
//! One session, one file. `save` overwrites the slot atomically; `load`
//! reports an absent slot as `Ok(None)` so the command layer can render a
//! plain "no save found" message, while every other failure propagates.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;
use crate::domain::snapshot::{restore, snapshot, SessionSnapshot, SNAPSHOT_VERSION};
use crate::domain::GameSession;

/// Storage failures other than "no snapshot yet". All fatal to the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {SNAPSHOT_VERSION})")]
    UnsupportedVersion { found: u32 },
}

/// Serializes a session to, and restores it from, one durable slot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the location resolved by [`config::save_path`].
    pub fn at_default_location() -> Self {
        Self::new(config::save_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with the session's current snapshot.
    ///
    /// The bytes land in a sibling temp file first and are renamed into
    /// place, so a crash mid-write cannot leave a truncated slot.
    pub fn save(&self, session: &GameSession) -> Result<(), StorageError> {
        let snap = snapshot(session);
        let bytes = serde_json::to_vec_pretty(&snap)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            bytes = bytes.len(),
            players = snap.players.len(),
            "session snapshot saved"
        );
        Ok(())
    }

    /// Replace-in-full read of the slot: `Ok(None)` when no snapshot exists.
    pub fn load(&self) -> Result<Option<GameSession>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot to load");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let snap: SessionSnapshot = serde_json::from_slice(&bytes)?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion { found: snap.version });
        }

        tracing::info!(
            path = %self.path.display(),
            players = snap.players.len(),
            game_over = snap.game_over,
            "session snapshot loaded"
        );
        Ok(Some(restore(snap)))
    }
}
