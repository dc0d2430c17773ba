//! Seasonal prompt source types.
//!
//! The prompt data is supplied externally as JSON mapping each season to an
//! ordered list of week entries, each entry an array of alternative prompt
//! strings. These types keep that wire shape so existing prompt files load
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::domain::season::Season;

/// One season-week's content: the alternative prompts the acting player or
/// group picks one interpretation of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekEntry {
    pub prompts: Vec<String>,
}

impl WeekEntry {
    pub fn new(prompts: Vec<String>) -> Self {
        Self { prompts }
    }
}

/// Read-only mapping from season to its ordered week entries.
///
/// Consumed once per session creation or reset to seed the week deck; the
/// deck copies and shuffles, so one `SeasonalPrompts` can seed any number of
/// sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalPrompts {
    pub spring: Vec<WeekEntry>,
    pub summer: Vec<WeekEntry>,
    pub autumn: Vec<WeekEntry>,
    pub winter: Vec<WeekEntry>,
}

impl SeasonalPrompts {
    /// The week entries supplied for `season`, in source order.
    pub fn for_season(&self, season: Season) -> &[WeekEntry] {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
        }
    }

    /// Total number of week entries across all seasons.
    pub fn total_weeks(&self) -> usize {
        Season::ORDER
            .iter()
            .map(|&s| self.for_season(s).len())
            .sum()
    }
}
