//! Seasonal prompt file loading.
//!
//! The prompt data lives outside the engine as a JSON file (season name to
//! list of week-entry arrays). It is read once per session creation or
//! reset; the domain only ever sees the parsed [`SeasonalPrompts`].

use std::fs;
use std::path::Path;

use crate::domain::SeasonalPrompts;
use crate::infra::snapshot_store::StorageError;

/// Read and parse a seasonal prompt file.
pub fn load_prompts(path: impl AsRef<Path>) -> Result<SeasonalPrompts, StorageError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let prompts: SeasonalPrompts = serde_json::from_slice(&bytes)?;

    tracing::info!(
        path = %path.display(),
        weeks = prompts.total_weeks(),
        "seasonal prompts loaded"
    );
    Ok(prompts)
}
