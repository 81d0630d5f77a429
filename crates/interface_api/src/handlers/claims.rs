//! Claim query handlers

use axum::{
    extract::State,
    Json,
};
use core_kernel::{ClaimHandlerId, DisasterId};
use rust_decimal::Decimal;

use crate::dto::ValueResponse;
use crate::extract::ApiPath;
use crate::{error::ApiError, AppState};

/// Number of closed claims
pub async fn count_closed(State(state): State<AppState>) -> Json<ValueResponse<usize>> {
    Json(ValueResponse::new(state.analytics().count_closed_claims()))
}

/// Number of claims assigned to a claim handler
pub async fn count_for_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ValueResponse<usize>>, ApiError> {
    let count = state
        .analytics()
        .count_claims_for_handler(ClaimHandlerId::new(id))?;
    Ok(Json(ValueResponse::new(count)))
}

/// Average claim cost for a claim handler
pub async fn average_cost_for_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Json<ValueResponse<Option<Decimal>>> {
    Json(ValueResponse::new(
        state
            .analytics()
            .average_claim_cost_for_handler(ClaimHandlerId::new(id)),
    ))
}

/// Total claim cost for a disaster
pub async fn total_cost_for_disaster(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Json<ValueResponse<Option<Decimal>>> {
    Json(ValueResponse::new(
        state
            .analytics()
            .total_claim_cost_for_disaster(DisasterId::new(id)),
    ))
}
