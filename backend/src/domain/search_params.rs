//! Raw query-string parameters and their validation into [`SearchParams`].

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::order::{OrderDirection, OrderField};
use super::wire::{DEFAULT_LIMIT, DEFAULT_OFFSET, PARAM_LIMIT, PARAM_OFFSET, PARAM_ORDER_BY};
use super::SearchError;

/// Parameters exactly as received. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawSearchParams {
    /// Case-sensitive substring of the full name or `about` text.
    pub query: Option<String>,
    /// `id`, `age` or `name`, case-insensitive. Defaults to `name`.
    pub order_field: Option<String>,
    /// `-1` descending, `0` stored order, any other integer ascending.
    pub order_by: Option<String>,
    /// Maximum records returned. Defaults to 10.
    pub limit: Option<String>,
    /// Filtered records skipped. Defaults to 0.
    pub offset: Option<String>,
}

/// Validated search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Substring filter; empty matches every user.
    pub query: String,
    /// Sort key.
    pub order_field: OrderField,
    /// Sort direction, stored order when unordered.
    pub direction: OrderDirection,
    /// May be negative; a negative limit selects nothing.
    pub limit: i64,
    /// May be negative; treated as zero.
    pub offset: i64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            order_field: OrderField::default(),
            direction: OrderDirection::default(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl SearchParams {
    /// Validate raw parameters.
    ///
    /// Checks run in a fixed order and the first failure wins: order field,
    /// then `limit`, `offset` and `order_by`.
    ///
    /// # Errors
    /// [`SearchError::BadOrderField`] for an unknown order field;
    /// [`SearchError::InvalidNumber`] for a non-integer numeric parameter.
    ///
    /// # Examples
    /// ```
    /// use user_search::domain::{OrderField, RawSearchParams, SearchParams};
    ///
    /// let params = SearchParams::parse(RawSearchParams {
    ///     order_field: Some("Age".into()),
    ///     ..RawSearchParams::default()
    /// })?;
    /// assert_eq!(params.order_field, OrderField::Age);
    /// assert_eq!(params.limit, 10);
    /// # Ok::<(), user_search::domain::SearchError>(())
    /// ```
    pub fn parse(raw: RawSearchParams) -> Result<Self, SearchError> {
        let RawSearchParams {
            query,
            order_field: raw_order_field,
            order_by: raw_order_by,
            limit: raw_limit,
            offset: raw_offset,
        } = raw;

        let order_field = present(raw_order_field)
            .map(|value| {
                value
                    .parse::<OrderField>()
                    .map_err(|_| SearchError::BadOrderField { value })
            })
            .transpose()?
            .unwrap_or_default();
        let limit = parse_integer(PARAM_LIMIT, raw_limit)?.unwrap_or(DEFAULT_LIMIT);
        let offset = parse_integer(PARAM_OFFSET, raw_offset)?.unwrap_or(DEFAULT_OFFSET);
        let direction = parse_integer(PARAM_ORDER_BY, raw_order_by)?
            .map(OrderDirection::from_wire)
            .unwrap_or_default();

        Ok(Self {
            query: query.unwrap_or_default(),
            order_field,
            direction,
            limit,
            offset,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.is_empty())
}

fn parse_integer(field: &'static str, value: Option<String>) -> Result<Option<i64>, SearchError> {
    present(value)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| SearchError::InvalidNumber { field, value: raw })
        })
        .transpose()
}
