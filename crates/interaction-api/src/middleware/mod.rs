//! Middleware stack for the API server
//!
//! Every route gets request IDs, a trace span and a 30s timeout. The interaction
//! routes additionally get CORS and a global rate limit; health probes do not.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use interaction_common::{CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level, Span};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Span for one HTTP request, tagged with its request ID
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Request ID, tracing and timeout; the request ID is assigned outermost so the
/// trace span can read it
fn with_request_tracing(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

/// Apply middleware stack to the router (no rate limiting, no CORS)
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    with_request_tracing(router)
}

/// Apply middleware stack with rate limiting and configured CORS
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let router = with_request_tracing(router.layer(cors_layer(cors_config, is_production)));

    // Rate limiting sits outside everything else
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(rate_limit_config.requests_per_second.into())
        .burst_size(rate_limit_config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .map(Arc::new);

    match governor_conf {
        Some(config) => router.layer(GovernorLayer { config }),
        None => {
            warn!(
                requests_per_second = rate_limit_config.requests_per_second,
                burst = rate_limit_config.burst,
                "Rate limiting disabled: per-second rate and burst must both be non-zero"
            );
            router
        }
    }
}

/// Origins the browser may call from; `None` means any origin
///
/// Outside production an empty list opens CORS up. In production an empty list
/// blocks every cross-origin request.
fn allowed_origins(config: &CorsConfig, is_production: bool) -> Option<Vec<HeaderValue>> {
    if config.allowed_origins.is_empty() && !is_production {
        return None;
    }

    Some(
        config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect(),
    )
}

fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()]);

    match allowed_origins(config, is_production) {
        None => {
            warn!("CORS: allowing any origin; set CORS_ALLOWED_ORIGINS to restrict");
            layer.allow_origin(Any)
        }
        Some(origins) if origins.is_empty() => {
            warn!("CORS: no allowed origins configured in production, browsers will be blocked");
            layer.allow_origin(AllowOrigin::list(origins))
        }
        Some(origins) => {
            info!(count = origins.len(), "CORS: allowing configured origins");
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
