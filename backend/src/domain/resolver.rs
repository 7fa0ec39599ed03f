//! Reference resolution of search queries against the user store.
//!
//! Resolution is a pure function of the store snapshot and the parameters:
//! filter, then (optionally) sort, then paginate. Validation happens before
//! any of that in [`SearchParams::parse`], so a rejected query never reaches
//! the store.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::UserStore;
use super::{RawSearchParams, SearchError, SearchPage, SearchParams, User};

/// Resolves search parameters against an injected user store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_search::domain::ports::InMemoryUserStore;
/// use user_search::domain::{Gender, QueryResolver, SearchParams, User};
///
/// let store = InMemoryUserStore::new(vec![
///     User::new(0, "Boyd Wolf", 22, "", Gender::Male),
///     User::new(1, "Hilda Mayer", 21, "", Gender::Female),
/// ]);
/// let resolver = QueryResolver::new(Arc::new(store));
/// let page = resolver.resolve(&SearchParams { limit: 1, ..SearchParams::default() })?;
/// assert_eq!(page.users.len(), 1);
/// assert!(page.has_more);
/// # Ok::<(), user_search::domain::SearchError>(())
/// ```
#[derive(Clone)]
pub struct QueryResolver {
    store: Arc<dyn UserStore>,
}

impl QueryResolver {
    /// Build a resolver over `store`.
    #[must_use]
    pub const fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Validate raw parameters, then resolve them.
    ///
    /// # Errors
    /// Any [`SearchError`]; validation failures abort before the store is read.
    pub fn resolve_raw(&self, raw: RawSearchParams) -> Result<SearchPage, SearchError> {
        let params = SearchParams::parse(raw).inspect_err(|error| {
            warn!(%error, tag = error.tag(), "search parameters rejected");
        })?;
        self.resolve(&params)
    }

    /// Filter, sort and paginate the store.
    ///
    /// # Errors
    /// [`SearchError::StoreUnavailable`] when the store cannot be read.
    pub fn resolve(&self, params: &SearchParams) -> Result<SearchPage, SearchError> {
        let stored = self.store.users().inspect_err(|error| {
            warn!(%error, "user store read failed");
        })?;

        let mut matched: Vec<User> = stored
            .iter()
            .filter(|user| user.matches(&params.query))
            .cloned()
            .collect();
        params.direction.sort(params.order_field, &mut matched);

        let matched_count = matched.len();
        let page = paginate(matched, params.limit, params.offset);
        debug!(
            matched = matched_count,
            returned = page.users.len(),
            has_more = page.has_more,
            order_field = %params.order_field,
            "search resolved"
        );
        Ok(page)
    }
}

/// Take `limit` records starting at `offset`.
///
/// A negative limit selects nothing; a negative offset starts at the first
/// record. `has_more` is set only when the page is full and at least one
/// record lies past `offset + limit`.
fn paginate(matched: Vec<User>, limit: i64, offset: i64) -> SearchPage {
    let Ok(page_size) = usize::try_from(limit) else {
        return SearchPage::default();
    };
    let start = usize::try_from(offset).unwrap_or(0);
    let total = matched.len();

    let users: Vec<User> = matched.into_iter().skip(start).take(page_size).collect();
    let has_more = users.len() == page_size && total > start.saturating_add(page_size);
    SearchPage { users, has_more }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{InMemoryUserStore, UserStoreError};
    use crate::domain::{Gender, OrderDirection, OrderField};
    use rstest::{fixture, rstest};

    struct UnavailableStore;

    impl UserStore for UnavailableStore {
        fn users(&self) -> Result<&[User], UserStoreError> {
            Err(UserStoreError::unavailable("dataset detached"))
        }
    }

    #[fixture]
    fn resolver() -> QueryResolver {
        let users = vec![
            User::new(0, "Boyd Wolf", 22, "Nulla cillum enim voluptate", Gender::Male),
            User::new(1, "Hilda Mayer", 21, "Sit commodo consectetur", Gender::Female),
            User::new(2, "Brooks Aguilar", 25, "Velit ullamco est aliqua", Gender::Male),
            User::new(3, "Allison Valdez", 21, "Labore excepteur voluptate", Gender::Male),
            User::new(4, "Twila Snow", 36, "Sint non sunt adipisicing", Gender::Female),
        ];
        QueryResolver::new(Arc::new(InMemoryUserStore::new(users)))
    }

    fn ids(page: &SearchPage) -> Vec<i64> {
        page.users.iter().map(User::id).collect()
    }

    fn params(limit: i64, offset: i64) -> SearchParams {
        SearchParams {
            limit,
            offset,
            ..SearchParams::default()
        }
    }

    #[rstest]
    fn query_matches_about_text(resolver: QueryResolver) {
        let page = resolver
            .resolve(&SearchParams {
                query: "Nulla cillum enim".into(),
                order_field: OrderField::Name,
                direction: OrderDirection::Descending,
                ..params(10, 0)
            })
            .expect("resolve");
        assert_eq!(ids(&page), vec![0]);
        assert!(!page.has_more);
    }

    #[rstest]
    #[case::surname("Aguilar", vec![2])]
    #[case::shared_word("voluptate", vec![0, 3])]
    #[case::wrong_case("aguilar", vec![])]
    #[case::absent("Zebra", vec![])]
    fn filter_is_case_sensitive_substring(
        resolver: QueryResolver,
        #[case] query: &str,
        #[case] expected: Vec<i64>,
    ) {
        let page = resolver
            .resolve(&SearchParams {
                query: query.into(),
                ..params(10, 0)
            })
            .expect("resolve");
        assert_eq!(ids(&page), expected);
    }

    #[rstest]
    fn unordered_keeps_stored_order_and_flags_more(resolver: QueryResolver) {
        let page = resolver
            .resolve(&SearchParams {
                order_field: OrderField::Id,
                ..params(3, 0)
            })
            .expect("resolve");
        assert_eq!(ids(&page), vec![0, 1, 2]);
        assert!(page.has_more);
    }

    #[rstest]
    #[case::age_ascending(OrderField::Age, OrderDirection::Ascending, vec![1, 3, 0, 2, 4])]
    #[case::age_descending(OrderField::Age, OrderDirection::Descending, vec![4, 2, 0, 1, 3])]
    #[case::id_descending(OrderField::Id, OrderDirection::Descending, vec![4, 3, 2, 1, 0])]
    #[case::name_ascending(OrderField::Name, OrderDirection::Ascending, vec![3, 0, 2, 1, 4])]
    fn sorts_on_requested_key(
        resolver: QueryResolver,
        #[case] order_field: OrderField,
        #[case] direction: OrderDirection,
        #[case] expected: Vec<i64>,
    ) {
        let page = resolver
            .resolve(&SearchParams {
                order_field,
                direction,
                ..params(10, 0)
            })
            .expect("resolve");
        assert_eq!(ids(&page), expected);
    }

    #[rstest]
    #[case::exact_fit(5, 0, 5, false)]
    #[case::one_left(4, 0, 4, true)]
    #[case::tail(10, 3, 2, false)]
    #[case::offset_past_end(3, 9, 0, false)]
    #[case::zero_limit(0, 0, 0, true)]
    #[case::negative_limit(-1, 0, 0, false)]
    #[case::negative_offset(2, -4, 2, true)]
    fn paginates_and_detects_more(
        resolver: QueryResolver,
        #[case] limit: i64,
        #[case] offset: i64,
        #[case] returned: usize,
        #[case] has_more: bool,
    ) {
        let page = resolver.resolve(&params(limit, offset)).expect("resolve");
        assert_eq!(page.users.len(), returned);
        assert_eq!(page.has_more, has_more);
    }

    #[rstest]
    fn rejects_bad_order_field_before_reading_store() {
        let resolver = QueryResolver::new(Arc::new(UnavailableStore));
        let error = resolver
            .resolve_raw(RawSearchParams {
                order_field: Some("picture".into()),
                ..RawSearchParams::default()
            })
            .expect_err("order field must be rejected");
        assert_eq!(
            error,
            SearchError::BadOrderField {
                value: "picture".into()
            }
        );
    }

    #[rstest]
    fn store_failure_surfaces_as_generic_error() {
        let resolver = QueryResolver::new(Arc::new(UnavailableStore));
        let error = resolver
            .resolve(&SearchParams::default())
            .expect_err("store failure must propagate");
        assert!(matches!(error, SearchError::StoreUnavailable(_)));
    }
}
