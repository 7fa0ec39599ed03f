//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **dataset**: loads the user store from the XML dataset at startup
//! - **search_http**: reqwest-backed client for the search endpoint
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod dataset;
pub mod search_http;
