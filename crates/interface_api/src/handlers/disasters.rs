//! Disaster query handlers

use std::collections::BTreeMap;

use axum::{
    extract::State,
    Json,
};
use core_kernel::{DisasterId, Region};
use rust_decimal::Decimal;

use crate::dto::ValueResponse;
use crate::extract::ApiPath;
use crate::{error::ApiError, AppState};

/// Number of disasters in a state
pub async fn count_for_state(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<ValueResponse<usize>>, ApiError> {
    let count = state.analytics().count_disasters_for_state(&name)?;
    Ok(Json(ValueResponse::new(count)))
}

/// State with the most disasters
pub async fn state_with_most(
    State(state): State<AppState>,
) -> Json<ValueResponse<Option<String>>> {
    let most = state
        .analytics()
        .state_with_most_disasters()
        .map(str::to_string);
    Json(ValueResponse::new(most))
}

/// State with the fewest disasters
pub async fn state_with_least(
    State(state): State<AppState>,
) -> Json<ValueResponse<Option<String>>> {
    let least = state
        .analytics()
        .state_with_least_disasters()
        .map(str::to_string);
    Json(ValueResponse::new(least))
}

/// Number of disasters declared after they ended
pub async fn count_declared_after_end(State(state): State<AppState>) -> Json<ValueResponse<usize>> {
    Json(ValueResponse::new(
        state.analytics().count_disasters_declared_after_end_date(),
    ))
}

/// Claim density of a disaster
pub async fn claim_density(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Json<ValueResponse<Option<Decimal>>> {
    Json(ValueResponse::new(
        state.analytics().disaster_claim_density(DisasterId::new(id)),
    ))
}

/// Disaster counts per census region
pub async fn count_by_region(
    State(state): State<AppState>,
) -> Json<ValueResponse<BTreeMap<Region, usize>>> {
    Json(ValueResponse::new(state.analytics().count_disasters_by_region()))
}
