//! Period query handlers

use axum::{extract::State, Json};
use domain_analytics::PeriodCost;

use crate::dto::ValueResponse;
use crate::{error::ApiError, AppState};

/// Three periods with the highest total claim cost
pub async fn top_three(
    State(state): State<AppState>,
) -> Result<Json<ValueResponse<Vec<PeriodCost>>>, ApiError> {
    let top = state.analytics().top_three_periods_by_claim_cost()?;
    Ok(Json(ValueResponse::new(top)))
}
