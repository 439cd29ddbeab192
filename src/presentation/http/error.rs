use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: Value,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(errors) => {
                Self::new(StatusCode::BAD_REQUEST, json!(errors))
            }
            ApplicationError::Validation(msg) => Self::text(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::text(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::text(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::text(StatusCode::FORBIDDEN, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::text(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::text(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::text(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => Self::internal(&msg),
        }
    }

    /// Malformed request body (not JSON, wrong field types, ...).
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::malformed("body", detail.into())
    }

    /// Query string that does not deserialize (duplicate or mistyped keys).
    pub fn malformed_query(detail: impl Into<String>) -> Self {
        Self::malformed("query", detail.into())
    }

    fn malformed(field: &str, detail: String) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            json!({ "issues": [{ "field": field, "message": detail }] }),
        )
    }

    fn internal(detail: &str) -> Self {
        tracing::error!(error = %detail, "request failed");
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }

    fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, Value::String(message.into()))
    }

    const fn new(status: StatusCode, message: Value) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            success: false,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error envelope. `message` is a string, or `{ "issues": [...] }` for
/// payloads that failed validation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[schema(value_type = Object)]
    pub message: Value,
    pub success: bool,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
