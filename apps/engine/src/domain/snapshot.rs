//! Versioned snapshot contract for whole-session persistence.
//!
//! Pure data-transfer shapes, converted to and from the live entities
//! field-by-field. The wire format is explicit and versioned; nothing here
//! relies on the in-memory types' own layout staying stable.

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::project::Project;
use crate::domain::prompts::WeekEntry;
use crate::domain::season::Season;
use crate::domain::session::GameSession;
use crate::domain::week_deck::WeekDeck;

/// Bump when the snapshot shape changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub is_mod: bool,
    pub contempt_tokens: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    pub weeks_remaining: u32,
    pub is_complete: bool,
    pub failed: bool,
}

/// Remaining (not yet drawn) week entries per season, front of each queue
/// first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    pub spring: Vec<WeekEntry>,
    pub summer: Vec<WeekEntry>,
    pub autumn: Vec<WeekEntry>,
    pub winter: Vec<WeekEntry>,
}

/// The single persisted serialization of an entire session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub seed: u64,
    pub players: Vec<PlayerSnapshot>,
    pub current_player_index: usize,
    pub abundances: Vec<String>,
    pub scarcities: Vec<String>,
    pub projects: Vec<ProjectSnapshot>,
    pub year: YearSnapshot,
    pub game_over: bool,
    pub logs: Vec<String>,
}

/// Capture a session as a snapshot at the current version.
pub fn snapshot(session: &GameSession) -> SessionSnapshot {
    let season = |s: Season| -> Vec<WeekEntry> { session.year.remaining_weeks(s).cloned().collect() };

    SessionSnapshot {
        version: SNAPSHOT_VERSION,
        seed: session.seed,
        players: session
            .players
            .iter()
            .map(|p| PlayerSnapshot {
                name: p.name.clone(),
                is_mod: p.is_mod,
                contempt_tokens: p.contempt_tokens,
            })
            .collect(),
        current_player_index: session.current_player_index,
        abundances: session.abundances.clone(),
        scarcities: session.scarcities.clone(),
        projects: session
            .projects
            .iter()
            .map(|p| ProjectSnapshot {
                name: p.name.clone(),
                weeks_remaining: p.weeks_remaining,
                is_complete: p.is_complete,
                failed: p.failed,
            })
            .collect(),
        year: YearSnapshot {
            spring: season(Season::Spring),
            summer: season(Season::Summer),
            autumn: season(Season::Autumn),
            winter: season(Season::Winter),
        },
        game_over: session.game_over,
        logs: session.logs.clone(),
    }
}

/// Reconstruct a session from a snapshot, entity by entity.
///
/// The caller (the snapshot store) has already checked the version.
pub fn restore(snap: SessionSnapshot) -> GameSession {
    GameSession {
        seed: snap.seed,
        players: snap
            .players
            .into_iter()
            .map(|p| Player {
                name: p.name,
                is_mod: p.is_mod,
                contempt_tokens: p.contempt_tokens,
            })
            .collect(),
        current_player_index: snap.current_player_index,
        abundances: snap.abundances,
        scarcities: snap.scarcities,
        projects: snap
            .projects
            .into_iter()
            .map(|p| Project {
                name: p.name,
                weeks_remaining: p.weeks_remaining,
                is_complete: p.is_complete,
                failed: p.failed,
            })
            .collect(),
        year: WeekDeck::from_remaining([
            snap.year.spring,
            snap.year.summer,
            snap.year.autumn,
            snap.year.winter,
        ]),
        game_over: snap.game_over,
        logs: snap.logs,
    }
}
