//! Dataset Files
//!
//! Writes a dataset bundle to a temporary directory using the default file
//! names `infra_data::DatasetPaths::from_dir` expects, so loader and server
//! tests can exercise real file I/O.

use std::fs;
use std::io;
use std::path::Path;

use domain_claims::Datasets;
use tempfile::TempDir;

const AGENTS_FILE: &str = "sfcc_2023_agents.json";
const CLAIM_HANDLERS_FILE: &str = "sfcc_2023_claim_handlers.json";
const CLAIMS_FILE: &str = "sfcc_2023_claims.json";
const DISASTERS_FILE: &str = "sfcc_2023_disasters.json";

/// Writes `data` as four JSON files into a fresh temporary directory
///
/// The directory is removed when the returned handle is dropped.
pub fn write_dataset_dir(data: &Datasets) -> io::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    write_json(&dir.path().join(AGENTS_FILE), data.agents())?;
    write_json(&dir.path().join(CLAIM_HANDLERS_FILE), data.claim_handlers())?;
    write_json(&dir.path().join(CLAIMS_FILE), data.claims())?;
    write_json(&dir.path().join(DISASTERS_FILE), data.disasters())?;
    Ok(dir)
}

fn write_json<T: serde::Serialize>(path: &Path, records: &[T]) -> io::Result<()> {
    let json = serde_json::to_vec_pretty(records)?;
    fs::write(path, json)
}
