//! Test Data Builders
//!
//! Provides builder patterns for constructing test records with sensible
//! defaults. Tests set only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
use domain_claims::{Agent, Claim, ClaimHandler, ClaimStatus, Datasets, Disaster};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Parses an ISO date, panicking on malformed input
pub fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid ISO date in test data")
}

/// Builder for test claims
///
/// Defaults to an open ("Received") claim of severity 5 costing 1000.00
/// against disaster 1, agent 1 and handler 1.
pub struct ClaimBuilder {
    claim: Claim,
}

impl ClaimBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            claim: Claim {
                id: ClaimId::new(id),
                disaster_id: DisasterId::new(1),
                agent_assigned_id: AgentId::new(1),
                claim_handler_assigned_id: ClaimHandlerId::new(1),
                status: ClaimStatus::from("Received"),
                severity_rating: 5,
                estimate_cost: dec!(1000.00),
                type_of_claim: None,
                total_loss: None,
                loss_of_life: None,
            },
        }
    }

    pub fn disaster(mut self, id: i64) -> Self {
        self.claim.disaster_id = DisasterId::new(id);
        self
    }

    pub fn agent(mut self, id: i64) -> Self {
        self.claim.agent_assigned_id = AgentId::new(id);
        self
    }

    pub fn handler(mut self, id: i64) -> Self {
        self.claim.claim_handler_assigned_id = ClaimHandlerId::new(id);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.claim.status = ClaimStatus::from(status);
        self
    }

    pub fn closed(self) -> Self {
        self.status("Closed")
    }

    pub fn severity(mut self, rating: i32) -> Self {
        self.claim.severity_rating = rating;
        self
    }

    pub fn cost(mut self, cost: Decimal) -> Self {
        self.claim.estimate_cost = cost;
        self
    }

    pub fn build(self) -> Claim {
        self.claim
    }
}

/// Builder for test disasters
///
/// Defaults to a Texas disaster with a 10 mile radius declared and ended on
/// 2023-01-01.
pub struct DisasterBuilder {
    disaster: Disaster,
}

impl DisasterBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            disaster: Disaster {
                id: DisasterId::new(id),
                kind: None,
                state: "Texas".to_string(),
                name: None,
                description: None,
                start_date: None,
                declared_date: date("2023-01-01"),
                end_date: date("2023-01-01"),
                radius_miles: dec!(10),
            },
        }
    }

    pub fn state(mut self, state: &str) -> Self {
        self.disaster.state = state.to_string();
        self
    }

    pub fn radius(mut self, miles: Decimal) -> Self {
        self.disaster.radius_miles = miles;
        self
    }

    pub fn declared(mut self, iso: &str) -> Self {
        self.disaster.declared_date = date(iso);
        self
    }

    pub fn ended(mut self, iso: &str) -> Self {
        self.disaster.end_date = date(iso);
        self
    }

    pub fn build(self) -> Disaster {
        self.disaster
    }
}

/// Creates a test agent
pub fn agent(id: i64, state: &str, secondary_language: &str) -> Agent {
    Agent {
        id: AgentId::new(id),
        first_name: None,
        last_name: None,
        state: state.to_string(),
        region: None,
        primary_language: Some("English".to_string()),
        secondary_language: secondary_language.to_string(),
        years_active: None,
    }
}

/// Creates a test claim handler
pub fn claim_handler(id: i64) -> ClaimHandler {
    ClaimHandler {
        id: ClaimHandlerId::new(id),
        first_name: None,
        last_name: None,
    }
}

/// Builder for a full dataset bundle
#[derive(Default)]
pub struct DatasetsBuilder {
    agents: Vec<Agent>,
    claim_handlers: Vec<ClaimHandler>,
    claims: Vec<Claim>,
    disasters: Vec<Disaster>,
}

impl DatasetsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn claim_handler(mut self, handler: ClaimHandler) -> Self {
        self.claim_handlers.push(handler);
        self
    }

    pub fn claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    pub fn claims(mut self, claims: impl IntoIterator<Item = Claim>) -> Self {
        self.claims.extend(claims);
        self
    }

    pub fn disaster(mut self, disaster: Disaster) -> Self {
        self.disasters.push(disaster);
        self
    }

    pub fn build(self) -> Datasets {
        Datasets::new(self.agents, self.claim_handlers, self.claims, self.disasters)
    }
}
