//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use super::auth::AccessToken;
use super::state::HttpState;
use crate::domain::ports::InMemoryUserStore;
use crate::domain::{Gender, QueryResolver, User};

/// Credential accepted by [`fixture_state`].
pub const TEST_ACCESS_TOKEN: &str = "1234567890";

/// Five users in stored (id) order.
pub fn fixture_users() -> Vec<User> {
    vec![
        User::new(0, "Boyd Wolf", 22, "Nulla cillum enim voluptate consequat", Gender::Male),
        User::new(1, "Hilda Mayer", 21, "Sit commodo consectetur minim", Gender::Female),
        User::new(2, "Brooks Aguilar", 25, "Velit ullamco est aliqua", Gender::Male),
        User::new(3, "Allison Valdez", 21, "Labore excepteur voluptate velit", Gender::Male),
        User::new(4, "Twila Snow", 36, "Sint non sunt adipisicing", Gender::Female),
    ]
}

/// Handler state over [`fixture_users`] guarded by [`TEST_ACCESS_TOKEN`].
pub fn fixture_state() -> HttpState {
    let store = InMemoryUserStore::new(fixture_users());
    HttpState::new(
        QueryResolver::new(Arc::new(store)),
        AccessToken::new(TEST_ACCESS_TOKEN),
    )
}
