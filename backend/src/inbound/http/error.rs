//! HTTP adapter mapping for search failures.
//!
//! Purpose: keep [`SearchError`] HTTP-agnostic while giving Actix handlers a
//! single error type that renders the wire bodies and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::SearchError;
use crate::domain::wire::{ErrorBody, GENERIC_ERROR_TAG, UnauthorizedBody};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures a search handler can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing or wrong access credential.
    #[error("bad access token")]
    Unauthorized,
    /// The query string could not be decoded at all.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
    /// The resolver rejected or failed the search.
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ApiError {
    fn tag(&self) -> &'static str {
        match self {
            Self::Search(error) => error.tag(),
            Self::Unauthorized | Self::MalformedQuery(_) => GENERIC_ERROR_TAG,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MalformedQuery(_) | Self::Search(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::Unauthorized => builder.json(UnauthorizedBody::default()),
            Self::MalformedQuery(_) | Self::Search(_) => builder.json(ErrorBody::tagged(self.tag())),
        }
    }
}
