//! Route definitions
//!
//! Interaction routes are mounted under /api/v1 once per subject kind.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use interaction_core::SubjectKind;

use crate::handlers::{health, interactions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    SubjectKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| router.merge(interaction_routes(kind)))
}

/// Interaction routes for one subject kind
fn interaction_routes(kind: SubjectKind) -> Router<AppState> {
    let base = format!("/{}/interactions", kind.resource());

    Router::new()
        .route(&base, post(interactions::react))
        .route(&format!("{base}/stats"), get(interactions::get_stats))
        .route(
            &format!("{base}/user/:user_id"),
            get(interactions::get_user_interactions),
        )
        .layer(Extension(kind))
}
