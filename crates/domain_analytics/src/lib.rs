//! Claims Analytics Engine
//!
//! A fixed catalogue of aggregate queries over the loaded [`Datasets`].
//! Every query is a pure function of the collections and its own arguments:
//! it scans once, fills a map of buckets keyed by some derived field, then
//! reads, reduces or ranks those buckets. Nothing is cached between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_analytics::ClaimsAnalytics;
//!
//! let analytics = ClaimsAnalytics::new(&datasets);
//! let closed = analytics.count_closed_claims();
//! let busiest = analytics.state_with_most_disasters();
//! ```
//!
//! [`Datasets`]: domain_claims::Datasets

pub mod agents;
pub mod buckets;
pub mod claims;
pub mod disasters;
pub mod display;
pub mod engine;
pub mod error;
pub mod periods;
pub mod ranking;

pub use claims::SEVERITY_RANGE;
pub use display::{DisplayData, DISPLAY_STATES};
pub use engine::ClaimsAnalytics;
pub use error::AnalyticsError;
pub use periods::PeriodCost;
