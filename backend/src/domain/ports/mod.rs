//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_search;
mod user_store;

#[cfg(test)]
pub use user_search::MockUserSearch;
pub use user_search::{UserSearch, UserSearchError};
pub use user_store::{InMemoryUserStore, UserStore, UserStoreError};
