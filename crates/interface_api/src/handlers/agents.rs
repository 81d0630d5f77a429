//! Agent query handlers

use std::collections::BTreeMap;

use axum::{
    extract::State,
    Json,
};
use core_kernel::AgentId;
use rust_decimal::Decimal;

use crate::dto::{OpenClaimsQuery, ValueResponse};
use crate::extract::{ApiPath, ApiQuery};
use crate::{error::ApiError, AppState};

/// Most spoken secondary language among a state's agents
pub async fn top_language_for_state(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Json<ValueResponse<String>> {
    let language = state.analytics().most_spoken_language_for_state(&name);
    Json(ValueResponse::new(language.to_string()))
}

/// Open claims for an agent at or above a severity
pub async fn open_claims(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<OpenClaimsQuery>,
) -> Result<Json<ValueResponse<Option<usize>>>, ApiError> {
    let count = state
        .analytics()
        .count_open_claims_for_agent(AgentId::new(id), query.min_severity)?;
    Ok(Json(ValueResponse::new(count)))
}

/// Total claim cost per agent
pub async fn claim_costs(
    State(state): State<AppState>,
) -> Json<ValueResponse<BTreeMap<AgentId, Decimal>>> {
    Json(ValueResponse::new(state.analytics().total_claim_cost_by_agent()))
}
