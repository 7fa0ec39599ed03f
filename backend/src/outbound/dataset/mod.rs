//! User dataset adapter.
//!
//! This module loads the XML user dataset into an
//! [`InMemoryUserStore`](crate::domain::ports::InMemoryUserStore) once during
//! startup.

mod dto;
mod xml_loader;

pub use xml_loader::{DatasetLoadError, load_users_from_path, parse_users_xml};
