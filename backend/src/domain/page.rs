//! Search result page.

use super::User;

/// One page of search results, owned by the caller.
///
/// Invariant: `users.len()` never exceeds the limit the page was requested
/// with. `has_more` is true iff further matching records exist past the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Records on this page, in result order.
    pub users: Vec<User>,
    /// Whether more matching records follow this page.
    pub has_more: bool,
}

impl SearchPage {
    /// Whether the page holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
