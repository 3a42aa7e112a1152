use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a non-admin sees on an admin-only route, whether or not the target exists.
pub const UNAUTHORIZED_MESSAGE: &str = "Hmmm, that page doesn't appear to exist.";

/// Response extension marking a rejection by the admin gate. The client only
/// sees a 404; middleware and tests can tell the two apart through this marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnauthorizedAccess;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    unauthorized: bool,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg)
            | ApplicationError::Domain(DomainError::Validation(msg)) => Self::bad_request(msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: UNAUTHORIZED_MESSAGE.into(),
                unauthorized: true,
            },
            ApplicationError::NotPersisted(msg) => Self::new(StatusCode::NOT_MODIFIED, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(err @ DomainError::Persistence(_)) => {
                tracing::error!(error = %err, "store failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }

    /// Update and delete report a vanished article as a bad request rather than 404.
    pub fn for_mutation(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::bad_request(msg),
            other => Self::from_error(other),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            unauthorized: false,
        }
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
        };
        let mut response = (self.status, Json(payload)).into_response();
        if self.unauthorized {
            response.extensions_mut().insert(UnauthorizedAccess);
        }
        response
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
    fn into_http_mutation(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_http_mutation(self) -> HttpResult<T> {
        self.map_err(HttpError::for_mutation)
    }
}
