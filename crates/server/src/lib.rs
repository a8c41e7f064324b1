use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;

use state::AppState;

/// Builds the application router with every page wired up
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::catalog::index))
        .route("/all/", get(routes::catalog::all))
        .route("/goals/{id}/", get(routes::catalog::goal))
        .route("/profiles/{id}/", get(routes::catalog::profile))
        .route("/request/", get(routes::request::request_form))
        .route("/request_done/", post(routes::request::request_done))
        .route(
            "/booking/{teacher_id}/{weekday}/{time}/",
            get(routes::booking::booking_form),
        )
        .route("/booking_done/", post(routes::booking::booking_done))
        .route("/health", get(routes::health::health))
        .fallback(routes::not_found)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
