use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum CatformError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Form error: {0}")]
    FormError(#[from] CatFormError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] figment::Error),
}

/// Rejections from turning a raw form submission into a `CatRecord`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CatFormError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
}

impl IntoResponse for CatformError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            CatformError::FormError(form_err) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ApiErrorBody {
                    code: "INVALID_FORM".to_string(),
                    message: form_err.to_string(),
                };
                (status, body)
            }
            other => {
                error!(error = %other, "request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
