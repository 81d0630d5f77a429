//! HTTP API Layer
//!
//! This crate serves the claims analytics queries over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One thin handler per analytics query
//! - **Middleware**: Request logging
//! - **DTOs**: Response envelopes and query parameters
//! - **Error Handling**: Consistent error responses
//!
//! The loaded datasets are shared read-only across requests through an
//! `Arc`; handlers never mutate them.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(datasets), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use domain_analytics::ClaimsAnalytics;
use domain_claims::Datasets;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{agents, claims, disasters, health, home, periods};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
    pub config: ApiConfig,
}

impl AppState {
    /// Query facade over the shared datasets
    pub fn analytics(&self) -> ClaimsAnalytics<'_> {
        ClaimsAnalytics::new(&self.datasets)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `datasets` - Loaded datasets, shared read-only by every request
/// * `config` - API configuration
pub fn create_router(datasets: Arc<Datasets>, config: ApiConfig) -> Router {
    let state = AppState { datasets, config };

    // Welcome, chart and health routes
    let home_routes = Router::new()
        .route("/", get(home::welcome))
        .route("/home/display_data", get(home::display_data))
        .route("/health", get(health::health_check));

    let claim_routes = Router::new()
        .route("/closed/count", get(claims::count_closed));

    let handler_routes = Router::new()
        .route("/:id/claims/count", get(claims::count_for_handler))
        .route("/:id/claims/average-cost", get(claims::average_cost_for_handler));

    let state_routes = Router::new()
        .route("/most-disasters", get(disasters::state_with_most))
        .route("/least-disasters", get(disasters::state_with_least))
        .route("/:state/disasters/count", get(disasters::count_for_state))
        .route("/:state/top-language", get(agents::top_language_for_state));

    let disaster_routes = Router::new()
        .route("/declared-after-end/count", get(disasters::count_declared_after_end))
        .route("/by-region", get(disasters::count_by_region))
        .route("/:id/total-cost", get(claims::total_cost_for_disaster))
        .route("/:id/density", get(disasters::claim_density));

    let agent_routes = Router::new()
        .route("/claim-costs", get(agents::claim_costs))
        .route("/:id/open-claims", get(agents::open_claims));

    let period_routes = Router::new()
        .route("/top-three", get(periods::top_three));

    let api_routes = Router::new()
        .nest("/claims", claim_routes)
        .nest("/claim-handlers", handler_routes)
        .nest("/states", state_routes)
        .nest("/disasters", disaster_routes)
        .nest("/agents", agent_routes)
        .nest("/periods", period_routes);

    Router::new()
        .merge(home_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum_middleware::from_fn(request_log_middleware)),
        )
        .with_state(state)
}
