//! User search service and client.
//!
//! The crate has two halves that share one wire contract:
//!
//! - [`outbound::search_http::HttpUserSearchClient`] turns a
//!   [`domain::SearchRequest`] into one authenticated HTTP call and classifies
//!   every outcome into a page or a [`domain::ports::UserSearchError`].
//! - [`domain::QueryResolver`], served by [`inbound::http`], answers those
//!   calls from an in-memory user store loaded out of an XML dataset.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
