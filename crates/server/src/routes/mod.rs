use crate::templates;
use axum::{http::StatusCode, response::Html};

pub mod booking;
pub mod catalog;
pub mod health;
pub mod request;

/// Fallback for paths no route matches
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        templates::error_page(StatusCode::NOT_FOUND),
    )
}
