//! Agent-centric queries

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use core_kernel::{round_currency, AgentId};

use crate::buckets::{count_by, sum_by};
use crate::engine::ClaimsAnalytics;
use crate::ranking::highest;

impl<'a> ClaimsAnalytics<'a> {
    /// Most common secondary language among a state's agents
    ///
    /// Ties go to the alphabetically first language. Returns an empty string
    /// when the state has no agents.
    pub fn most_spoken_language_for_state(&self, state: &str) -> &'a str {
        let languages = self
            .agents()
            .iter()
            .filter(|agent| agent.state == state)
            .map(|agent| agent.secondary_language.as_str());
        let by_language = count_by(languages, |language| *language);

        highest(by_language.into_iter().map(|(language, count)| (count, language)))
            .map(|(_, language)| language)
            .unwrap_or("")
    }

    /// Total estimated claim cost per agent, rounded to the cent
    ///
    /// Every agent in the agent collection appears, with zero when it has no
    /// claims. Agent ids referenced only by claims appear as well.
    pub fn total_claim_cost_by_agent(&self) -> BTreeMap<AgentId, Decimal> {
        let by_agent = sum_by(
            self.claims(),
            |claim| claim.agent_assigned_id,
            |claim| claim.estimate_cost,
        );

        let mut totals: BTreeMap<AgentId, Decimal> = self
            .agents()
            .iter()
            .map(|agent| (agent.id, round_currency(Decimal::ZERO)))
            .collect();
        for (agent_id, total) in by_agent {
            totals.insert(agent_id, round_currency(total));
        }
        totals
    }
}
