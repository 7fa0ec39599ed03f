//! Access credential check used by HTTP handlers.
//!
//! The credential is an opaque token compared by exact match against the
//! `AccessToken` request header.

use std::fmt;

use actix_web::HttpRequest;
use tracing::debug;

use super::{ApiError, ApiResult};
use crate::domain::wire::ACCESS_TOKEN_HEADER;

/// Expected access credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Expect exactly `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Exact comparison; an absent header never matches.
    #[must_use]
    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented == Some(self.0.as_str())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Reject the request unless it carries the expected credential.
///
/// # Errors
/// [`ApiError::Unauthorized`] when the header is missing, not valid text, or
/// different from `expected`.
pub fn require_access_token(request: &HttpRequest, expected: &AccessToken) -> ApiResult<()> {
    let presented = request
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if expected.matches(presented) {
        Ok(())
    } else {
        debug!(header_present = presented.is_some(), "access token rejected");
        Err(ApiError::Unauthorized)
    }
}
