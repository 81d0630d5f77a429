//! US census regions
//!
//! Maps each state (and the District of Columbia) to one of four regions.
//! Territories are not part of any region.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A US census region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    West,
    Midwest,
    South,
    Northeast,
}

const WEST: &[&str] = &[
    "Alaska", "Hawaii", "Washington", "Oregon", "California", "Montana", "Idaho", "Wyoming",
    "Nevada", "Utah", "Colorado", "Arizona", "New Mexico",
];

const MIDWEST: &[&str] = &[
    "North Dakota", "South Dakota", "Minnesota", "Wisconsin", "Michigan", "Nebraska", "Iowa",
    "Illinois", "Indiana", "Ohio", "Missouri", "Kansas",
];

const SOUTH: &[&str] = &[
    "Oklahoma", "Texas", "Arkansas", "Louisiana", "Kentucky", "Tennessee", "Mississippi",
    "Alabama", "West Virginia", "Virginia", "North Carolina", "South Carolina", "Georgia",
    "Florida",
];

const NORTHEAST: &[&str] = &[
    "Maryland", "Delaware", "District of Columbia", "Pennsylvania", "New York", "New Jersey",
    "Connecticut", "Massachusetts", "Vermont", "New Hampshire", "Rhode Island", "Maine",
];

impl Region {
    pub const ALL: [Region; 4] = [Region::West, Region::Midwest, Region::South, Region::Northeast];

    /// States belonging to this region
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Region::West => WEST,
            Region::Midwest => MIDWEST,
            Region::South => SOUTH,
            Region::Northeast => NORTHEAST,
        }
    }

    /// Resolves a state name (exact match) to its region
    pub fn for_state(state: &str) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|region| region.states().contains(&state))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::West => "west",
            Region::Midwest => "midwest",
            Region::South => "south",
            Region::Northeast => "northeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::invalid_argument(format!("Unknown region: {}", s)))
    }
}
