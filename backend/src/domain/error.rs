//! Resolver failures.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto the
//! wire tags in [`crate::domain::wire`].

use super::ports::UserStoreError;
use super::wire::{BAD_ORDER_FIELD_TAG, GENERIC_ERROR_TAG};

/// Why a search could not be resolved.
///
/// Any of these aborts the request before filtering, sorting or pagination
/// run; the resolver never returns a partial page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// `order_field` named no known field.
    #[error("unknown order field: {value}")]
    BadOrderField { value: String },
    /// A numeric parameter failed to parse.
    #[error("{field} must be an integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    /// The user store could not be read.
    #[error("user store unavailable: {0}")]
    StoreUnavailable(#[from] UserStoreError),
}

impl SearchError {
    /// Wire tag reported for this failure.
    ///
    /// # Examples
    /// ```
    /// use user_search::domain::SearchError;
    ///
    /// let err = SearchError::BadOrderField { value: "picture".into() };
    /// assert_eq!(err.tag(), "ErrorBadOrderField");
    /// ```
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::BadOrderField { .. } => BAD_ORDER_FIELD_TAG,
            Self::InvalidNumber { .. } | Self::StoreUnavailable(_) => GENERIC_ERROR_TAG,
        }
    }
}
