//! The seasonal week deck: per-season consumption queues.

use std::collections::VecDeque;

use crate::domain::prompts::{SeasonalPrompts, WeekEntry};
use crate::domain::season::Season;
use crate::domain::shuffle::{derive_season_seed, shuffle_with_seed};
use crate::errors::{DomainError, StateKind};

/// The randomized year: one destructively-consumed queue of week entries per
/// season. Drawing pops the front of a season's queue; there is no peek.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDeck {
    queues: [VecDeque<WeekEntry>; Season::COUNT],
}

impl WeekDeck {
    /// Build a deck by copying each season's entries from `prompts` and
    /// uniformly shuffling them with a seed derived per season from
    /// `base_seed`.
    pub fn new(prompts: &SeasonalPrompts, base_seed: u64) -> Self {
        let queues = Season::ORDER.map(|season| {
            let mut entries: Vec<WeekEntry> = prompts.for_season(season).to_vec();
            shuffle_with_seed(&mut entries, derive_season_seed(base_seed, season.index()));
            entries.into()
        });
        Self { queues }
    }

    /// Rebuild a deck from already-consumed per-season queues (snapshot
    /// restore). No shuffling; the order is taken as-is.
    pub fn from_remaining(remaining: [Vec<WeekEntry>; Season::COUNT]) -> Self {
        Self {
            queues: remaining.map(Into::into),
        }
    }

    /// The first season, in fixed order, with weeks left to draw; `None`
    /// once the whole deck is exhausted.
    pub fn current_season(&self) -> Option<Season> {
        Season::ORDER
            .into_iter()
            .find(|season| !self.queues[season.index()].is_empty())
    }

    /// Remove and return the front entry of `season`'s queue.
    ///
    /// Callers should check [`WeekDeck::current_season`] first; drawing from
    /// an empty season queue is a state error.
    pub fn draw_week(&mut self, season: Season) -> Result<WeekEntry, DomainError> {
        self.queues[season.index()].pop_front().ok_or_else(|| {
            DomainError::state(
                StateKind::SeasonExhausted,
                format!("no weeks left in {season}"),
            )
        })
    }

    /// True once every season's queue is empty.
    pub fn is_exhausted(&self) -> bool {
        self.current_season().is_none()
    }

    /// Number of weeks left to draw in `season`.
    pub fn remaining(&self, season: Season) -> usize {
        self.queues[season.index()].len()
    }

    /// The not-yet-drawn entries of `season`, front of the queue first.
    pub fn remaining_weeks(&self, season: Season) -> impl Iterator<Item = &WeekEntry> {
        self.queues[season.index()].iter()
    }
}
