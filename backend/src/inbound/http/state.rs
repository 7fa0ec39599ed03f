//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the resolver and the expected credential, and remain testable without
//! I/O.

use super::auth::AccessToken;
use crate::domain::QueryResolver;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Resolves decoded queries against the store.
    pub resolver: QueryResolver,
    /// Credential every search request must present.
    pub access_token: AccessToken,
}

impl HttpState {
    /// Bundle the resolver and the expected credential.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_search::domain::QueryResolver;
    /// use user_search::domain::ports::InMemoryUserStore;
    /// use user_search::inbound::http::auth::AccessToken;
    /// use user_search::inbound::http::state::HttpState;
    ///
    /// let resolver = QueryResolver::new(Arc::new(InMemoryUserStore::default()));
    /// let state = HttpState::new(resolver, AccessToken::new("1234567890"));
    /// let _resolver = state.resolver.clone();
    /// ```
    #[must_use]
    pub const fn new(resolver: QueryResolver, access_token: AccessToken) -> Self {
        Self {
            resolver,
            access_token,
        }
    }
}
