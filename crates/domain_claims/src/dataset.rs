//! The loaded dataset bundle

use core_kernel::DisasterId;

use crate::{Agent, Claim, ClaimHandler, Disaster};

/// The four record collections of the claims scenario
///
/// Built once at startup and never mutated afterwards. Every analytics query
/// borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    agents: Vec<Agent>,
    claim_handlers: Vec<ClaimHandler>,
    claims: Vec<Claim>,
    disasters: Vec<Disaster>,
}

impl Datasets {
    pub fn new(
        agents: Vec<Agent>,
        claim_handlers: Vec<ClaimHandler>,
        claims: Vec<Claim>,
        disasters: Vec<Disaster>,
    ) -> Self {
        Self {
            agents,
            claim_handlers,
            claims,
            disasters,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn claim_handlers(&self) -> &[ClaimHandler] {
        &self.claim_handlers
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn disasters(&self) -> &[Disaster] {
        &self.disasters
    }

    /// Finds a disaster by id with a linear scan
    pub fn find_disaster(&self, id: DisasterId) -> Option<&Disaster> {
        self.disasters.iter().find(|disaster| disaster.id == id)
    }
}
