//! Client-side search query and its local validation.

use super::order::{OrderDirection, OrderField};

/// Reasons a query is rejected before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchRequestError {
    /// `limit` was negative.
    #[error("limit must be >= 0")]
    NegativeLimit,
    /// `offset` was negative.
    #[error("offset must be >= 0")]
    NegativeOffset,
    /// `order_field` names no sort key.
    #[error("unknown order field")]
    UnknownOrderField,
}

/// Query built by a caller for one search call.
///
/// `order_field` stays a raw string so that callers can pass user input
/// straight through; [`SearchRequest::validate`] resolves it. An empty value
/// leaves the choice to the server, which sorts by name.
///
/// # Examples
/// ```
/// use user_search::domain::{OrderDirection, SearchRequest};
///
/// let request = SearchRequest::new()
///     .with_query("Nulla cillum enim")
///     .with_order("Name", OrderDirection::Descending)
///     .with_limit(10);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    /// Records wanted; must not be negative.
    pub limit: i64,
    /// Matching records to skip; must not be negative.
    pub offset: i64,
    /// Free-text filter; empty means no filter.
    pub query: String,
    /// Raw sort key, matched case-insensitively.
    pub order_field: String,
    /// Sort direction.
    pub order_direction: OrderDirection,
}

/// A [`SearchRequest`] that passed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearchRequest {
    /// Records wanted, at least zero.
    pub limit: i64,
    /// Matching records to skip, at least zero.
    pub offset: i64,
    /// Free-text filter.
    pub query: String,
    /// `None` when the caller left the order field empty.
    pub order_field: Option<OrderField>,
    /// Sort direction.
    pub order_direction: OrderDirection,
}

impl SearchRequest {
    /// Empty request: no filter, server-side ordering, zero limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the number of matching records to skip.
    #[must_use]
    pub const fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the free-text filter.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the sort key and direction.
    #[must_use]
    pub fn with_order(mut self, field: impl Into<String>, direction: OrderDirection) -> Self {
        self.order_field = field.into();
        self.order_direction = direction;
        self
    }

    /// Check limit, offset and order field, in that order.
    ///
    /// # Errors
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<ValidatedSearchRequest, SearchRequestError> {
        if self.limit < 0 {
            return Err(SearchRequestError::NegativeLimit);
        }
        if self.offset < 0 {
            return Err(SearchRequestError::NegativeOffset);
        }
        let order_field = if self.order_field.is_empty() {
            None
        } else {
            let field = self
                .order_field
                .parse::<OrderField>()
                .map_err(|_| SearchRequestError::UnknownOrderField)?;
            Some(field)
        };

        Ok(ValidatedSearchRequest {
            limit: self.limit,
            offset: self.offset,
            query: self.query.clone(),
            order_field,
            order_direction: self.order_direction,
        })
    }
}
