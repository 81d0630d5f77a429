//! Dataset Loading Layer
//!
//! Reads the four claims-scenario JSON files (agents, claim handlers, claims,
//! disasters) from disk into a [`Datasets`] bundle. Loading happens once at
//! startup; any failure is fatal for the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_data::{DatasetPaths, load_datasets};
//!
//! let datasets = load_datasets(&DatasetPaths::from_dir("data"))?;
//! ```
//!
//! [`Datasets`]: domain_claims::Datasets

pub mod error;
pub mod loader;
pub mod paths;

pub use error::DataLoadError;
pub use loader::{load_datasets, load_records};
pub use paths::DatasetPaths;
