//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims analytics test suite.
//!
//! # Modules
//!
//! - `fixtures`: A small, hand-checked scenario dataset
//! - `builders`: Builder patterns for records and datasets
//! - `files`: Writes datasets to a temporary directory as JSON files
//! - `assertions`: Custom assertion helpers for decimal results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod files;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use files::*;
pub use fixtures::*;
pub use generators::*;
