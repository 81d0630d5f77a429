//! Dataset file locations

use std::path::{Path, PathBuf};

pub const AGENTS_FILE: &str = "sfcc_2023_agents.json";
pub const CLAIM_HANDLERS_FILE: &str = "sfcc_2023_claim_handlers.json";
pub const CLAIMS_FILE: &str = "sfcc_2023_claims.json";
pub const DISASTERS_FILE: &str = "sfcc_2023_disasters.json";

/// Locations of the four dataset files
///
/// # Example
///
/// ```rust
/// use infra_data::DatasetPaths;
///
/// let paths = DatasetPaths::from_dir("data")
///     .claims("fixtures/claims.json");
/// assert!(paths.agents.ends_with("sfcc_2023_agents.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub agents: PathBuf,
    pub claim_handlers: PathBuf,
    pub claims: PathBuf,
    pub disasters: PathBuf,
}

impl DatasetPaths {
    /// Uses the default file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            agents: dir.join(AGENTS_FILE),
            claim_handlers: dir.join(CLAIM_HANDLERS_FILE),
            claims: dir.join(CLAIMS_FILE),
            disasters: dir.join(DISASTERS_FILE),
        }
    }

    /// Overrides the agents file
    pub fn agents(mut self, path: impl Into<PathBuf>) -> Self {
        self.agents = path.into();
        self
    }

    /// Overrides the claim handlers file
    pub fn claim_handlers(mut self, path: impl Into<PathBuf>) -> Self {
        self.claim_handlers = path.into();
        self
    }

    /// Overrides the claims file
    pub fn claims(mut self, path: impl Into<PathBuf>) -> Self {
        self.claims = path.into();
        self
    }

    /// Overrides the disasters file
    pub fn disasters(mut self, path: impl Into<PathBuf>) -> Self {
        self.disasters = path.into();
        self
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::from_dir("data")
    }
}
