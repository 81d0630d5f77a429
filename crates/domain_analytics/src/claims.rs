//! Claim-centric queries

use rust_decimal::Decimal;
use std::ops::RangeInclusive;
use tracing::debug;

use core_kernel::{round_currency, AgentId, ClaimHandlerId, DisasterId};

use crate::buckets::{bucket, count_by, tally_by};
use crate::engine::ClaimsAnalytics;
use crate::error::AnalyticsError;

/// Valid claim severity ratings
pub const SEVERITY_RANGE: RangeInclusive<i32> = 1..=10;

impl<'a> ClaimsAnalytics<'a> {
    /// Number of claims whose status is exactly "Closed"
    pub fn count_closed_claims(&self) -> usize {
        self.claims().iter().filter(|claim| claim.is_closed()).count()
    }

    /// Number of claims assigned to a claim handler
    ///
    /// # Errors
    ///
    /// `NotFound` if the handler has no claims at all. Callers that want a
    /// zero must check membership first.
    pub fn count_claims_for_handler(
        &self,
        handler_id: ClaimHandlerId,
    ) -> Result<usize, AnalyticsError> {
        let by_handler = count_by(self.claims(), |claim| claim.claim_handler_assigned_id);
        bucket(&by_handler, &handler_id, "claim handler")
    }

    /// Sum of estimated costs for a disaster, rounded to the cent
    ///
    /// Returns `None` when no claim references the disaster.
    pub fn total_claim_cost_for_disaster(&self, disaster_id: DisasterId) -> Option<Decimal> {
        let by_disaster = tally_by(
            self.claims(),
            |claim| claim.disaster_id,
            |claim| claim.estimate_cost,
        );
        by_disaster
            .get(&disaster_id)
            .map(|tally| round_currency(tally.total))
    }

    /// Mean estimated cost of a handler's claims, rounded to the cent
    ///
    /// Returns `None` when the handler has no claims.
    pub fn average_claim_cost_for_handler(&self, handler_id: ClaimHandlerId) -> Option<Decimal> {
        let by_handler = tally_by(
            self.claims(),
            |claim| claim.claim_handler_assigned_id,
            |claim| claim.estimate_cost,
        );
        by_handler
            .get(&handler_id)
            .and_then(|tally| tally.mean())
            .map(round_currency)
    }

    /// Open claims for an agent with severity at or above `min_severity_rating`
    ///
    /// Returns `Ok(None)` when the agent has no matching claims, which covers
    /// agents without claims and unknown agents alike.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `min_severity_rating` is outside `1..=10`.
    pub fn count_open_claims_for_agent(
        &self,
        agent_id: AgentId,
        min_severity_rating: i32,
    ) -> Result<Option<usize>, AnalyticsError> {
        if !SEVERITY_RANGE.contains(&min_severity_rating) {
            return Err(AnalyticsError::invalid_argument(format!(
                "severity rating {} outside {}..={}",
                min_severity_rating,
                SEVERITY_RANGE.start(),
                SEVERITY_RANGE.end()
            )));
        }

        let matching = self
            .claims()
            .iter()
            .filter(|claim| claim.is_open_at_or_above(min_severity_rating));
        let by_agent = count_by(matching, |claim| claim.agent_assigned_id);

        debug!(%agent_id, min_severity_rating, agents = by_agent.len(), "Bucketed open claims");
        Ok(by_agent.get(&agent_id).copied())
    }
}
