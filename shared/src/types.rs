//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// A farm location in the state → district → tehsil → village hierarchy.
///
/// Each level is only meaningful within the level above it; an empty string
/// means "not selected".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub state: String,
    pub district: String,
    pub tehsil: String,
    pub village: String,
}

impl Location {
    pub fn new(
        state: impl Into<String>,
        district: impl Into<String>,
        tehsil: impl Into<String>,
        village: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
            tehsil: tehsil.into(),
            village: village.into(),
        }
    }

    /// True when every level has a selection
    pub fn is_complete(&self) -> bool {
        !self.state.is_empty()
            && !self.district.is_empty()
            && !self.tehsil.is_empty()
            && !self.village.is_empty()
    }

    /// True when nothing has been selected yet
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
            && self.district.is_empty()
            && self.tehsil.is_empty()
            && self.village.is_empty()
    }

    /// Human readable "District, State" label, empty until a district is chosen
    pub fn display_label(&self) -> String {
        if self.district.is_empty() {
            String::new()
        } else {
            format!("{}, {}", self.district, self.state)
        }
    }
}

/// Indian cropping season derived from the calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// November through February
    Winter,
    /// March through May
    Summer,
    /// June through October
    Monsoon,
}

impl Season {
    /// Bucket a calendar month. The three buckets cover all twelve months.
    pub fn from_month(month: chrono::Month) -> Self {
        match month.number_from_month() {
            3..=5 => Season::Summer,
            6..=10 => Season::Monsoon,
            _ => Season::Winter,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "Winter"),
            Season::Summer => write!(f, "Summer"),
            Season::Monsoon => write!(f, "Monsoon"),
        }
    }
}
