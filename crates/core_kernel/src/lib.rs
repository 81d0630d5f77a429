//! Core Kernel - Foundational types shared by the claims analytics crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Integer-backed identifiers for agents, handlers, claims and disasters
//! - Decimal rounding rules for currency and density figures
//! - Month/year period keys derived from calendar dates
//! - The US census region table

pub mod error;
pub mod identifiers;
pub mod period;
pub mod region;
pub mod rounding;

pub use error::CoreError;
pub use identifiers::{AgentId, ClaimHandlerId, ClaimId, DisasterId};
pub use period::PeriodKey;
pub use region::Region;
pub use rounding::{round_currency, round_density, CURRENCY_DP, DENSITY_DP};
