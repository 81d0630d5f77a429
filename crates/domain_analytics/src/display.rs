//! Bar chart series for the display endpoint

use serde::Serialize;

use crate::engine::ClaimsAnalytics;

/// States always charted alongside the least and most affected ones
pub const DISPLAY_STATES: [&str; 6] = [
    "Alaska",
    "Oklahoma",
    "Texas",
    "Florida",
    "California",
    "New York",
];

/// Labelled bar chart series of disaster counts per state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayData {
    pub x: Vec<String>,
    pub y: Vec<usize>,
}

impl DisplayData {
    fn push(&mut self, label: &str, value: usize) {
        self.x.push(label.to_string());
        self.y.push(value);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl<'a> ClaimsAnalytics<'a> {
    /// Disaster counts for the least and most affected states followed by
    /// [`DISPLAY_STATES`]
    ///
    /// Each state is charted once. States with no recorded disasters are
    /// left off the chart rather than drawn as zero.
    pub fn display_data(&self) -> DisplayData {
        let ranked = [self.state_with_least_disasters(), self.state_with_most_disasters()];
        let mut states: Vec<&str> = Vec::new();
        for state in ranked.into_iter().flatten().chain(DISPLAY_STATES) {
            if !states.contains(&state) {
                states.push(state);
            }
        }

        let mut data = DisplayData::default();
        for state in states {
            if let Ok(count) = self.count_disasters_for_state(state) {
                data.push(state, count);
            }
        }
        data
    }
}
