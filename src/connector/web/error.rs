use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use super::html::Page;
use super::paths;
use crate::domain::{DomainError, QueryMode};

/// An error page for one of the interactive routes.
#[derive(Debug)]
pub struct WebError {
    mode: QueryMode,
    status: StatusCode,
    message: String,
}

impl WebError {
    pub fn new(mode: QueryMode, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            mode,
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(mode: QueryMode, message: impl Into<String>) -> Self {
        Self::new(mode, StatusCode::BAD_REQUEST, message)
    }

    pub fn from_domain(mode: QueryMode, err: DomainError) -> Self {
        Self::new(mode, status_for(&err), err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        warn!(
            "{} request failed with {}: {}",
            self.mode, self.status, self.message
        );

        let page = Page::new("Error")
            .heading(&format!("Error {}", self.status.as_u16()))
            .preformatted("border:thin solid red", &self.message)
            .link(paths::form_path(self.mode), "try again");

        (self.status, page).into_response()
    }
}
