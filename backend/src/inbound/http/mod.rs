//! HTTP inbound adapter exposing the search endpoint and health checks.

pub mod auth;
pub mod error;
pub mod health;
pub mod search;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
