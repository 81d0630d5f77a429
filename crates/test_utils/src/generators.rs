//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating dataset records that keep
//! the scenario invariants: severities in 1..=10, non-negative costs,
//! positive radii and valid calendar dates.

use chrono::{Duration, NaiveDate};
use domain_claims::{Agent, Claim, Datasets, Disaster};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{agent, ClaimBuilder, DatasetsBuilder, DisasterBuilder};

const STATES: [&str; 5] = ["Alaska", "Florida", "New York", "Ohio", "Texas"];
const LANGUAGES: [&str; 4] = ["French", "German", "Spanish", "Tagalog"];
const STATUSES: [&str; 4] = ["Closed", "Received", "In Review", "Closed"];

/// Strategy for state names drawn from a small pool
pub fn state_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STATES.to_vec())
}

/// Strategy for secondary languages drawn from a small pool
pub fn language_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LANGUAGES.to_vec())
}

/// Strategy for claim costs between 0.00 and 100000.00
pub fn cost_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for severity ratings within 1..=10
pub fn severity_strategy() -> impl Strategy<Value = i32> {
    1i32..=10i32
}

/// Strategy for dates between 2000-01-01 and roughly 2029
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..10_950i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default() + Duration::days(offset)
    })
}

/// Strategy for an agent with the given id
pub fn agent_strategy(id: i64) -> impl Strategy<Value = Agent> {
    (state_strategy(), language_strategy())
        .prop_map(move |(state, language)| agent(id, state, language))
}

/// Strategy for a disaster with the given id
pub fn disaster_strategy(id: i64) -> impl Strategy<Value = Disaster> {
    (state_strategy(), date_strategy(), date_strategy(), 1i64..500i64).prop_map(
        move |(state, declared, ended, radius)| {
            let mut disaster = DisasterBuilder::new(id)
                .state(state)
                .radius(Decimal::from(radius))
                .build();
            disaster.declared_date = declared;
            disaster.end_date = ended;
            disaster
        },
    )
}

/// Strategy for a claim referencing ids within the given bounds
pub fn claim_strategy(
    id: i64,
    disasters: i64,
    agents: i64,
    handlers: i64,
) -> impl Strategy<Value = Claim> {
    (
        1..=disasters,
        1..=agents,
        1..=handlers,
        prop::sample::select(STATUSES.to_vec()),
        severity_strategy(),
        cost_strategy(),
    )
        .prop_map(move |(disaster, agent, handler, status, severity, cost)| {
            ClaimBuilder::new(id)
                .disaster(disaster)
                .agent(agent)
                .handler(handler)
                .status(status)
                .severity(severity)
                .cost(cost)
                .build()
        })
}

/// Strategy for a referentially consistent dataset bundle
///
/// Every claim references an existing disaster; agent and handler ids stay
/// within 1..=5 and 1..=3.
pub fn datasets_strategy() -> impl Strategy<Value = Datasets> {
    (1usize..6, 0usize..40).prop_flat_map(|(disaster_count, claim_count)| {
        let disasters = (1..=disaster_count as i64)
            .map(disaster_strategy)
            .collect::<Vec<_>>();
        let agents = (1..=5i64).map(agent_strategy).collect::<Vec<_>>();
        let claims = (1..=claim_count as i64)
            .map(|id| claim_strategy(id, disaster_count as i64, 5, 3))
            .collect::<Vec<_>>();

        (disasters, agents, claims).prop_map(|(disasters, agents, claims)| {
            let mut builder = DatasetsBuilder::new().claims(claims);
            for disaster in disasters {
                builder = builder.disaster(disaster);
            }
            for agent in agents {
                builder = builder.agent(agent);
            }
            builder.build()
        })
    })
}
