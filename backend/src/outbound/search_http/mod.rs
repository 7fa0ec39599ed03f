//! Search endpoint outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `UserSearch` port.

mod http_client;

pub use http_client::{DEFAULT_REQUEST_TIMEOUT, HttpUserSearchClient};
