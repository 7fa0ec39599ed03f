//! Driving port for searching users through the remote endpoint.
//!
//! The domain owns the query shape, the page shape and the failure taxonomy
//! so callers can branch on errors without knowing the transport.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{SearchPage, SearchRequest, SearchRequestError};

define_port_error! {
    /// Errors surfaced by a search call.
    ///
    /// `InvalidQuery` and `BadRequest` mean the caller's input was wrong;
    /// `Timeout` and `Transport` mean the server or network failed and a
    /// retry may help. The client itself never retries.
    pub enum UserSearchError {
        /// Rejected locally, before any request was sent.
        InvalidQuery { reason: String } =>
            "bad request: {reason}",
        /// The endpoint rejected the access credential.
        Unauthorized =>
            "unauthorized: bad access token",
        /// The endpoint rejected the query.
        BadRequest { reason: String } =>
            "bad request: {reason}",
        /// No response arrived within the request timeout.
        Timeout { message: String } =>
            "search timed out: {message}"; retryable,
        /// Connection failure or unexpected status.
        Transport { message: String } =>
            "search transport failed: {message}"; retryable,
        /// The response body did not have the expected shape.
        MalformedResponse { message: String } =>
            "malformed search response: {message}",
    }
}

impl UserSearchError {
    /// Whether the caller's query was at fault, locally or per the server.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. } | Self::BadRequest { .. })
    }

    /// Reason attached to a bad request, if this is one.
    #[must_use]
    pub const fn reason(&self) -> Option<&str> {
        match self {
            Self::InvalidQuery { reason } | Self::BadRequest { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}

impl From<SearchRequestError> for UserSearchError {
    fn from(err: SearchRequestError) -> Self {
        Self::invalid_query(err.to_string())
    }
}

/// Port for paginated, filtered, sorted user search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSearch: Send + Sync {
    /// Run one search. A single attempt is made per call.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_search::domain::ports::UserSearch;
    /// use user_search::domain::{OrderDirection, SearchRequest};
    ///
    /// let page = client
    ///     .search(&SearchRequest::new().with_limit(3).with_order("Id", OrderDirection::Unordered))
    ///     .await?;
    /// assert!(page.users.len() <= 3);
    /// # Ok::<(), user_search::domain::ports::UserSearchError>(())
    /// ```
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UserSearchError>;
}
