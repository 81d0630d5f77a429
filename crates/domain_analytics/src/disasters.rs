//! Disaster-centric queries

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use core_kernel::{round_density, DisasterId, Region};

use crate::buckets::{bucket, count_by};
use crate::engine::ClaimsAnalytics;
use crate::error::AnalyticsError;
use crate::ranking::{highest, lowest};

impl<'a> ClaimsAnalytics<'a> {
    fn disasters_by_state(&self) -> HashMap<&'a str, usize> {
        let states = self
            .disasters()
            .iter()
            .map(|disaster| disaster.state.as_str());
        count_by(states, |state| *state)
    }

    /// Number of disasters in a state (exact name match)
    ///
    /// # Errors
    ///
    /// `NotFound` if no disaster was recorded for the state.
    pub fn count_disasters_for_state(&self, state: &str) -> Result<usize, AnalyticsError> {
        bucket(&self.disasters_by_state(), &state, "state")
    }

    /// State with the most disasters, ties going to the alphabetically first
    ///
    /// Returns `None` when there are no disasters.
    pub fn state_with_most_disasters(&self) -> Option<&'a str> {
        let by_state = self.disasters_by_state();
        highest(by_state.into_iter().map(|(state, count)| (count, state)))
            .map(|(_, state)| state)
    }

    /// State with the fewest disasters, ties going to the alphabetically first
    ///
    /// Returns `None` when there are no disasters.
    pub fn state_with_least_disasters(&self) -> Option<&'a str> {
        let by_state = self.disasters_by_state();
        lowest(by_state.into_iter().map(|(state, count)| (count, state)))
            .map(|(_, state)| state)
    }

    /// Number of disasters declared strictly after their end date
    pub fn count_disasters_declared_after_end_date(&self) -> usize {
        self.disasters()
            .iter()
            .filter(|disaster| disaster.declared_after_end())
            .count()
    }

    /// Claims per square mile of a disaster's impact circle, to three places
    ///
    /// An existing disaster with no claims has density zero. Returns `None`
    /// for an unknown disaster, and when the impact area is zero or does not
    /// fit in a `Decimal`.
    pub fn disaster_claim_density(&self, disaster_id: DisasterId) -> Option<Decimal> {
        let disaster = self.datasets().find_disaster(disaster_id)?;

        let by_disaster = count_by(self.claims(), |claim| claim.disaster_id);
        let claims = by_disaster.get(&disaster_id).copied().unwrap_or(0);

        let density = disaster
            .impact_area()
            .and_then(|area| Decimal::from(claims).checked_div(area));
        if density.is_none() {
            debug!(
                %disaster_id,
                radius = %disaster.radius_miles,
                "Disaster impact area is zero or out of range"
            );
        }
        density.map(round_density)
    }

    /// Disaster counts per census region
    ///
    /// Disasters in states outside the region table (territories, unknown
    /// names) are left out. Regions without disasters are absent.
    pub fn count_disasters_by_region(&self) -> BTreeMap<Region, usize> {
        let in_regions = self
            .disasters()
            .iter()
            .filter_map(|disaster| Region::for_state(&disaster.state));
        count_by(in_regions, |region| *region).into_iter().collect()
    }
}
