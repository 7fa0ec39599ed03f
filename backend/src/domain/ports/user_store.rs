//! Driven port exposing the loaded user collection.
//!
//! The collection is loaded once during startup and never written again, so
//! implementations hand out shared borrows and need no locking.

use super::define_port_error;
use crate::domain::User;

define_port_error! {
    /// Errors surfaced while reading the user store.
    pub enum UserStoreError {
        /// The backing collection cannot be read.
        Unavailable { message: String } =>
            "user store unavailable: {message}",
    }
}

/// Read-only access to the user collection, in stored order.
pub trait UserStore: Send + Sync {
    /// Borrow every record in stored order.
    ///
    /// # Errors
    /// Returns [`UserStoreError::Unavailable`] when the collection cannot be
    /// read.
    fn users(&self) -> Result<&[User], UserStoreError>;
}

/// Immutable in-memory snapshot built at startup.
///
/// # Examples
/// ```
/// use user_search::domain::ports::{InMemoryUserStore, UserStore};
/// use user_search::domain::{Gender, User};
///
/// let store = InMemoryUserStore::new(vec![User::new(0, "Boyd Wolf", 22, "", Gender::Male)]);
/// assert_eq!(store.users()?.len(), 1);
/// # Ok::<(), user_search::domain::ports::UserStoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Wrap a snapshot of records in stored order.
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Number of stored records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<Vec<User>> for InMemoryUserStore {
    fn from(users: Vec<User>) -> Self {
        Self::new(users)
    }
}

impl UserStore for InMemoryUserStore {
    fn users(&self) -> Result<&[User], UserStoreError> {
        Ok(self.users.as_slice())
    }
}
