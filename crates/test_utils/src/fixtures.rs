//! Pre-built Test Fixtures
//!
//! A small scenario with hand-checked answers, shared by the engine, loader
//! and API test suites.
//!
//! | Disaster | State   | Declared   | Ended      | Radius | Claims     |
//! |----------|---------|------------|------------|--------|------------|
//! | 1        | Texas   | 2023-05-10 | 2023-05-01 | 5      | 1, 2, 3    |
//! | 2        | Texas   | 2023-04-01 | 2023-05-01 | 10     | 4          |
//! | 3        | Florida | 2023-05-20 | 2023-06-01 | 2      | 5          |
//! | 4        | Florida | 2022-11-03 | 2022-10-01 | 1      | 6          |
//! | 5        | Alaska  | 2023-02-14 | 2023-03-01 | 20     | 7, 8       |
//! | 6        | Ohio    | 2023-04-15 | 2023-04-30 | 3      | none       |
//!
//! Claim 8 is assigned to agent 99, which is not in the agent collection.
//! Claim handler 3 has no claims.

use domain_claims::Datasets;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::builders::{agent, claim_handler, ClaimBuilder, DatasetsBuilder, DisasterBuilder};

/// Shared instance of [`scenario`]
pub static SCENARIO: Lazy<Datasets> = Lazy::new(scenario);

/// Builds the scenario dataset described in the module docs
pub fn scenario() -> Datasets {
    DatasetsBuilder::new()
        .agent(agent(1, "Texas", "Spanish"))
        .agent(agent(2, "Texas", "Spanish"))
        .agent(agent(3, "Texas", "Vietnamese"))
        .agent(agent(4, "Florida", "French"))
        .agent(agent(5, "Florida", "German"))
        .agent(agent(6, "Florida", "German"))
        .agent(agent(7, "Florida", "French"))
        .agent(agent(8, "Alaska", "Russian"))
        .claim_handler(claim_handler(1))
        .claim_handler(claim_handler(2))
        .claim_handler(claim_handler(3))
        .disaster(
            DisasterBuilder::new(1)
                .state("Texas")
                .declared("2023-05-10")
                .ended("2023-05-01")
                .radius(dec!(5))
                .build(),
        )
        .disaster(
            DisasterBuilder::new(2)
                .state("Texas")
                .declared("2023-04-01")
                .ended("2023-05-01")
                .radius(dec!(10))
                .build(),
        )
        .disaster(
            DisasterBuilder::new(3)
                .state("Florida")
                .declared("2023-05-20")
                .ended("2023-06-01")
                .radius(dec!(2))
                .build(),
        )
        .disaster(
            DisasterBuilder::new(4)
                .state("Florida")
                .declared("2022-11-03")
                .ended("2022-10-01")
                .radius(dec!(1))
                .build(),
        )
        .disaster(
            DisasterBuilder::new(5)
                .state("Alaska")
                .declared("2023-02-14")
                .ended("2023-03-01")
                .radius(dec!(20))
                .build(),
        )
        .disaster(
            DisasterBuilder::new(6)
                .state("Ohio")
                .declared("2023-04-15")
                .ended("2023-04-30")
                .radius(dec!(3))
                .build(),
        )
        .claim(
            ClaimBuilder::new(1)
                .disaster(1)
                .agent(1)
                .handler(1)
                .closed()
                .severity(8)
                .cost(dec!(1500.00))
                .build(),
        )
        .claim(
            ClaimBuilder::new(2)
                .disaster(1)
                .agent(1)
                .handler(1)
                .severity(9)
                .cost(dec!(2500.50))
                .build(),
        )
        .claim(
            ClaimBuilder::new(3)
                .disaster(1)
                .agent(2)
                .handler(2)
                .status("In Review")
                .severity(3)
                .cost(dec!(1000.25))
                .build(),
        )
        .claim(
            ClaimBuilder::new(4)
                .disaster(2)
                .agent(3)
                .handler(2)
                .closed()
                .severity(2)
                .cost(dec!(400.00))
                .build(),
        )
        .claim(
            ClaimBuilder::new(5)
                .disaster(3)
                .agent(4)
                .handler(1)
                .severity(7)
                .cost(dec!(3200.10))
                .build(),
        )
        .claim(
            ClaimBuilder::new(6)
                .disaster(4)
                .agent(5)
                .handler(2)
                .severity(10)
                .cost(dec!(800.00))
                .build(),
        )
        .claim(
            ClaimBuilder::new(7)
                .disaster(5)
                .agent(1)
                .handler(1)
                .status("In Review")
                .severity(6)
                .cost(dec!(999.99))
                .build(),
        )
        .claim(
            ClaimBuilder::new(8)
                .disaster(5)
                .agent(99)
                .handler(2)
                .closed()
                .severity(4)
                .cost(dec!(100.00))
                .build(),
        )
        .build()
}
