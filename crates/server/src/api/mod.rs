//! REST API: router, handlers, request models and error mapping.

pub mod errors;
pub mod handlers;
pub mod models;

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Builds the application router. Every request is traced and bounded by `request_timeout`.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/articles", get(handlers::list_articles).post(handlers::create_article))
        .route(
            "/articles/{id}",
            get(handlers::get_article).put(handlers::update_article).delete(handlers::delete_article),
        )
        .route("/articles/{id}/score", post(handlers::score_article))
        .route("/score", post(handlers::score))
        .route("/stats", get(handlers::stats))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
