use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: String,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match self {
            AppError::TemplateError(e) => {
                tracing::error!("Template render error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (status_code, "An unexpected error occurred").into_response()
            }
        }
    }
}
