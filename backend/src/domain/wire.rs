//! Wire contract shared by the search endpoint and its client.
//!
//! ```text
//! GET /?query=<text>&order_field=<id|age|name>&order_by=<-1|0|1>&limit=<int>&offset=<int>
//! AccessToken: <credential>
//! ```
//!
//! Successful responses carry a JSON array of users. Validation failures use
//! `400 {"error": "<tag>"}`; a missing or wrong credential yields
//! `401 {"status": 401, "err": "bad_access_token"}`.
//!
//! ## Overfetch
//!
//! The endpoint body carries no "more pages" marker. Clients therefore ask for
//! one record more than the page they want (see
//! [`OverfetchWindow`](crate::domain::OverfetchWindow)): a response longer than
//! the page proves more results exist, and the extra record is dropped before
//! the page reaches the caller. Pages never exceed [`MAX_PAGE_SIZE`], so the
//! wire limit a conforming client sends never exceeds [`MAX_WIRE_LIMIT`].

use serde::{Deserialize, Serialize};

/// Free-text filter parameter.
pub const PARAM_QUERY: &str = "query";
/// Sort key parameter (`id`, `age` or `name`, case-insensitive).
pub const PARAM_ORDER_FIELD: &str = "order_field";
/// Sort direction parameter (`-1`, `0` or `1`).
pub const PARAM_ORDER_BY: &str = "order_by";
/// Maximum number of records to return.
pub const PARAM_LIMIT: &str = "limit";
/// Number of filtered records to skip.
pub const PARAM_OFFSET: &str = "offset";

/// Header carrying the access credential.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Tag reported when the order field is not recognised.
pub const BAD_ORDER_FIELD_TAG: &str = "ErrorBadOrderField";
/// Tag reported for every other resolver failure.
pub const GENERIC_ERROR_TAG: &str = "user_read_error";
/// Error code carried by the unauthorised response body.
pub const BAD_ACCESS_TOKEN_CODE: &str = "bad_access_token";

/// Resolver default when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 10;
/// Resolver default when `offset` is absent.
pub const DEFAULT_OFFSET: i64 = 0;

/// Largest page a client hands back to its caller.
pub const MAX_PAGE_SIZE: i64 = 25;
/// Largest `limit` a conforming client puts on the wire.
pub const MAX_WIRE_LIMIT: i64 = MAX_PAGE_SIZE + 1;

/// Body of a `400` response.
///
/// A body without an `error` field decodes with an empty tag, so a `400` in
/// some other JSON shape still reads as an unnamed failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error tag.
    #[serde(default)]
    pub error: String,
}

impl ErrorBody {
    /// Build a body carrying the given tag.
    #[must_use]
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self { error: tag.into() }
    }

    /// Whether the body names the order-field failure.
    #[must_use]
    pub fn is_bad_order_field(&self) -> bool {
        self.error == BAD_ORDER_FIELD_TAG
    }
}

/// Body of a `401` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnauthorizedBody {
    /// Mirrors the HTTP status.
    pub status: u16,
    /// Machine-readable error code.
    pub err: String,
}

impl Default for UnauthorizedBody {
    fn default() -> Self {
        Self {
            status: 401,
            err: BAD_ACCESS_TOKEN_CODE.to_owned(),
        }
    }
}
