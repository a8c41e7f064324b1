use crate::templates;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(err) => {
                log::error!("database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Template(err) => {
                log::error!("template error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, templates::error_page(status)).into_response()
    }
}
