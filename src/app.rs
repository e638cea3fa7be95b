//! Router assembly: common routes at the root, tutorial routes under `/api`, CORS, body limit and tracing.

use crate::config::ServerConfig;
use crate::routes::{common_routes, tutorial_routes};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// CORS headers for the one configured origin; other origins get none.
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = HeaderValue::from_str(allowed_origin).into_iter().collect();
    if origins.is_empty() {
        tracing::warn!(origin = %allowed_origin, "invalid CORS origin, no origin will be allowed");
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", tutorial_routes(state))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_allowed_origin)),
        )
}
