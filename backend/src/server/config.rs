//! Server settings loaded via OrthoConfig.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_WORKERS: usize = 2;
const DEFAULT_ACCESS_TOKEN: &str = "1234567890";

fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("dataset.xml")
}

/// Settings for the reference search server.
///
/// Every field may come from the command line, a config file, or a
/// `USER_SEARCH_*` environment variable.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SEARCH")]
pub struct ServerSettings {
    /// Number of HTTP worker threads.
    #[ortho_config(default = 2)]
    pub workers: usize,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// XML dataset loaded into the user store at startup.
    pub dataset_path: Option<PathBuf>,
    /// Value the `AccessToken` header must carry.
    pub access_token: Option<String>,
}

impl ServerSettings {
    /// Return the configured listen address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the worker count, never less than one.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }

    /// Return the configured dataset path, falling back to the bundled fixture.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path.clone().unwrap_or_else(default_dataset_path)
    }

    /// Return the configured access token, falling back to the default.
    #[must_use]
    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(DEFAULT_ACCESS_TOKEN)
    }
}
