//! Overfetch contract between the search client and the resolver.
//!
//! The endpoint returns a bare array, so a client cannot tell a full last page
//! from a page with more behind it. The client asks for `page_size + 1`
//! records instead: if the extra record arrives, more results exist and the
//! record is dropped before the page is handed back.

use super::wire::{MAX_PAGE_SIZE, MAX_WIRE_LIMIT};
use super::{SearchPage, User};

/// Page bookkeeping for one client call.
///
/// # Examples
/// ```
/// use user_search::domain::OverfetchWindow;
///
/// let window = OverfetchWindow::for_limit(40);
/// assert_eq!(window.page_size(), 25);
/// assert_eq!(window.wire_limit(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverfetchWindow {
    page_size: usize,
}

impl OverfetchWindow {
    /// Window for a caller-requested limit. Limits above
    /// [`MAX_PAGE_SIZE`] are clamped; negative limits yield an empty page.
    #[must_use]
    pub fn for_limit(limit: i64) -> Self {
        let clamped = limit.clamp(0, MAX_PAGE_SIZE);
        Self {
            page_size: usize::try_from(clamped).unwrap_or_default(),
        }
    }

    /// Number of users the caller can receive.
    #[must_use]
    pub const fn page_size(self) -> usize {
        self.page_size
    }

    /// `limit` to put on the wire: one past the page size.
    #[must_use]
    pub fn wire_limit(self) -> i64 {
        i64::try_from(self.page_size)
            .map(|size| size + 1)
            .unwrap_or(MAX_WIRE_LIMIT)
    }

    /// Turn the overfetched response into the caller's page.
    #[must_use]
    pub fn settle(self, mut users: Vec<User>) -> SearchPage {
        let has_more = users.len() > self.page_size;
        users.truncate(self.page_size);
        SearchPage { users, has_more }
    }
}
