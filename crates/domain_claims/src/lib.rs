//! Claims Scenario Domain
//!
//! Record types for the four datasets of the claims scenario and the
//! immutable [`Datasets`] bundle that owns them once loaded.
//!
//! ```text
//! Disaster 1 --- * Claim * --- 1 Agent
//!                    *
//!                    |
//!                    1
//!              ClaimHandler
//! ```

pub mod agent;
pub mod claim;
pub mod dataset;
pub mod disaster;
pub mod handler;

pub use agent::Agent;
pub use claim::{Claim, ClaimStatus};
pub use dataset::Datasets;
pub use disaster::Disaster;
pub use handler::ClaimHandler;
