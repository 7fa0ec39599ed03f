//! Reqwest-backed search client adapter.
//!
//! This adapter owns transport details only: local validation before sending,
//! query-string encoding, timeout and HTTP status mapping, and JSON decoding
//! into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::domain::ports::{UserSearch, UserSearchError};
use crate::domain::wire::{
    ACCESS_TOKEN_HEADER, ErrorBody, PARAM_LIMIT, PARAM_OFFSET, PARAM_ORDER_BY, PARAM_ORDER_FIELD,
    PARAM_QUERY,
};
use crate::domain::{
    OrderField, OverfetchWindow, SearchPage, SearchRequest, SearchRequestError, User,
    ValidatedSearchRequest,
};

/// Request timeout used by [`HttpUserSearchClient::new`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

const UNKNOWN_ERROR_REASON: &str = "unknown error";

/// Search client that performs HTTP GET requests against one endpoint.
///
/// Each call makes exactly one attempt and completes on response or when the
/// request timeout elapses.
pub struct HttpUserSearchClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl HttpUserSearchClient {
    /// Build a client with [`DEFAULT_REQUEST_TIMEOUT`].
    ///
    /// # Examples
    /// ```
    /// use user_search::outbound::search_http::HttpUserSearchClient;
    ///
    /// let endpoint = url::Url::parse("http://127.0.0.1:8080/")?;
    /// let client = HttpUserSearchClient::new(endpoint, "1234567890")?;
    /// assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8080/");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, access_token: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, access_token, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(
        endpoint: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: access_token.into(),
        })
    }

    /// Endpoint this client sends requests to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSearch for HttpUserSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, UserSearchError> {
        let validated = request.validate().inspect_err(|error: &SearchRequestError| {
            debug!(%error, "search request rejected locally");
        })?;
        let window = OverfetchWindow::for_limit(validated.limit);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&encode_query(&validated, window))
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(&error))?;
        let users = classify_response(status, body.as_ref()).inspect_err(|error| {
            warn!(%error, status = status.as_u16(), "search call failed");
        })?;

        let page = window.settle(users);
        debug!(
            returned = page.users.len(),
            has_more = page.has_more,
            "search call succeeded"
        );
        Ok(page)
    }
}

/// Encode a validated request as query parameters.
///
/// `limit` on the wire is the overfetch limit, not the caller's limit.
fn encode_query(
    request: &ValidatedSearchRequest,
    window: OverfetchWindow,
) -> [(&'static str, String); 5] {
    [
        (PARAM_QUERY, request.query.clone()),
        (
            PARAM_ORDER_FIELD,
            request
                .order_field
                .map(OrderField::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (PARAM_ORDER_BY, request.order_direction.to_wire().to_string()),
        (PARAM_LIMIT, window.wire_limit().to_string()),
        (PARAM_OFFSET, request.offset.to_string()),
    ]
}

fn classify_response(status: StatusCode, body: &[u8]) -> Result<Vec<User>, UserSearchError> {
    match status {
        StatusCode::OK => parse_users(body),
        StatusCode::UNAUTHORIZED => Err(UserSearchError::unauthorized()),
        StatusCode::BAD_REQUEST => Err(parse_bad_request(body)),
        _ => Err(map_status_error(status, body)),
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserSearchError> {
    serde_json::from_slice(body).map_err(|error| {
        UserSearchError::malformed_response(format!("invalid users payload: {error}"))
    })
}

fn parse_bad_request(body: &[u8]) -> UserSearchError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(decoded) if decoded.is_bad_order_field() => {
            UserSearchError::bad_request(SearchRequestError::UnknownOrderField.to_string())
        }
        Ok(_) => UserSearchError::bad_request(UNKNOWN_ERROR_REASON),
        Err(error) => {
            UserSearchError::malformed_response(format!("invalid error payload: {error}"))
        }
    }
}

fn map_transport_error(error: &reqwest::Error) -> UserSearchError {
    if error.is_timeout() {
        UserSearchError::timeout(error.to_string())
    } else {
        UserSearchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSearchError {
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        UserSearchError::transport(format!("unexpected status {}", status.as_u16()))
    } else {
        UserSearchError::transport(format!(
            "unexpected status {}: {}",
            status.as_u16(),
            body_preview
        ))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
