//! The analytics entry point

use domain_claims::{Agent, Claim, ClaimHandler, Datasets, Disaster};

/// Read-only query facade over the loaded datasets
///
/// Queries are grouped by the collection they mostly scan: see the `claims`,
/// `disasters`, `agents`, `periods` and `display` modules. Cloning is free;
/// the facade only holds a shared borrow.
#[derive(Debug, Clone, Copy)]
pub struct ClaimsAnalytics<'a> {
    data: &'a Datasets,
}

impl<'a> ClaimsAnalytics<'a> {
    pub fn new(data: &'a Datasets) -> Self {
        Self { data }
    }

    pub fn datasets(&self) -> &'a Datasets {
        self.data
    }

    pub fn agents(&self) -> &'a [Agent] {
        self.data.agents()
    }

    pub fn claim_handlers(&self) -> &'a [ClaimHandler] {
        self.data.claim_handlers()
    }

    pub fn claims(&self) -> &'a [Claim] {
        self.data.claims()
    }

    pub fn disasters(&self) -> &'a [Disaster] {
        self.data.disasters()
    }
}
