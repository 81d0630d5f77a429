//! JSON dataset loader

use std::fs;
use std::path::Path;

use domain_claims::Datasets;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::DataLoadError;
use crate::paths::DatasetPaths;

/// Reads a JSON array of records from `path`
///
/// # Errors
///
/// `Io` if the file cannot be read, `Parse` if it is not a JSON array of `T`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataLoadError> {
    let bytes = fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "Loaded dataset");
    Ok(records)
}

/// Loads all four datasets, stopping at the first failure
pub fn load_datasets(paths: &DatasetPaths) -> Result<Datasets, DataLoadError> {
    let agents = load_records(&paths.agents)?;
    let claim_handlers = load_records(&paths.claim_handlers)?;
    let claims = load_records(&paths.claims)?;
    let disasters = load_records(&paths.disasters)?;

    Ok(Datasets::new(agents, claim_handlers, claims, disasters))
}
