//! File locations, resolved from environment variables. The defaults put
//! both files in the process working directory.

use std::env;
use std::path::PathBuf;

/// Where the single snapshot slot lives (defaults to `game_save.json`)
pub fn save_path() -> PathBuf {
    env::var("QUIET_YEAR_SAVE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("game_save.json"))
}

/// Where the seasonal prompt data lives (defaults to `weeks.json`)
pub fn prompts_path() -> PathBuf {
    env::var("QUIET_YEAR_WEEKS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("weeks.json"))
}
