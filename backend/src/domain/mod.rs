//! Domain primitives and use-cases.
//!
//! Purpose: define the user record, the search query contract, and the
//! reference resolver independently of HTTP. Both the inbound adapter (which
//! serves the resolver) and the outbound client (which calls it) build on the
//! types here, so the two sides share one definition of the wire contract.
//!
//! Public surface:
//! - `User`, `Gender`: immutable user record.
//! - `OrderField`, `OrderDirection`: closed sort variants.
//! - `RawSearchParams`, `SearchParams`: query-string input and its validated form.
//! - `QueryResolver`: filter, sort and paginate the store.
//! - `SearchRequest`, `OverfetchWindow`: client-side query and page bookkeeping.
//! - `SearchPage`: one page of results.
//! - `SearchError`: resolver failures.

pub mod error;
pub mod order;
pub mod overfetch;
pub mod page;
pub mod ports;
pub mod resolver;
pub mod search_params;
pub mod search_request;
pub mod user;
pub mod wire;

pub use self::error::SearchError;
pub use self::order::{OrderDirection, OrderField, UnknownOrderField};
pub use self::overfetch::OverfetchWindow;
pub use self::page::SearchPage;
pub use self::resolver::QueryResolver;
pub use self::search_params::{RawSearchParams, SearchParams};
pub use self::search_request::{SearchRequest, SearchRequestError, ValidatedSearchRequest};
pub use self::user::{Gender, User};
