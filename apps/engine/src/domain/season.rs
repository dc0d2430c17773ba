use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// One of the four phases of a year, consumed in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Number of seasons in a year.
    pub const COUNT: usize = 4;

    /// Fixed consumption order: spring, then summer, autumn, winter.
    pub const ORDER: [Season; Season::COUNT] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Position of this season in [`Season::ORDER`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        };
        write!(f, "{name}")
    }
}
