//! Request and response data transfer objects

use serde::{Deserialize, Serialize};

/// Envelope used by the display routes: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Envelope used by the query routes: `{"value": ...}`
///
/// Absence sentinels serialize as `{"value": null}`, which is distinct from
/// a zero count and from a 404.
#[derive(Debug, Serialize)]
pub struct ValueResponse<T> {
    pub value: T,
}

impl<T> ValueResponse<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Query string for the open-claims route
#[derive(Debug, Deserialize)]
pub struct OpenClaimsQuery {
    pub min_severity: i32,
}
