//! Welcome and chart handlers

use axum::{extract::State, Json};
use domain_analytics::DisplayData;

use crate::dto::DataResponse;
use crate::AppState;

const WELCOME: &str = "Welcome to SF Coding Competition 2023!";

/// Welcome message
pub async fn welcome() -> Json<DataResponse<&'static str>> {
    Json(DataResponse { data: WELCOME })
}

/// Bar chart series of disaster counts for the least and most affected
/// states and a fixed set of comparison states
pub async fn display_data(State(state): State<AppState>) -> Json<DataResponse<DisplayData>> {
    Json(DataResponse {
        data: state.analytics().display_data(),
    })
}
