use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::views;

/// Application-level failures surfaced at the HTTP boundary.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "INPUT_ERROR"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };

        let page = views::page(
            "Error",
            html! {
                h1 { (message) }
            },
        );

        (code, page).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the underlying error and replace it with an internal failure.
    fn reject(self, message: &'static str) -> Result<T, AppError>;

    /// Log the underlying error and replace it with a bad-input failure.
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }

    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Input(message)
        })
    }
}
