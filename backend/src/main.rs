//! Reference search server entry-point: loads the dataset and serves it.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};
use user_search::domain::QueryResolver;
use user_search::inbound::http::auth::AccessToken;
use user_search::inbound::http::health::HealthState;
use user_search::inbound::http::state::HttpState;
use user_search::outbound::dataset::load_users_from_path;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let dataset_path = settings.dataset_path();
    let store = load_users_from_path(&dataset_path).map_err(std::io::Error::other)?;

    let resolver = QueryResolver::new(Arc::new(store));
    let http_state = HttpState::new(resolver, AccessToken::new(settings.access_token()));
    let health_state = web::Data::new(HealthState::new());

    let workers = settings.worker_count();
    let server = create_server(&health_state, http_state, bind_addr, workers)?;
    info!(%bind_addr, workers, "listening");
    server.await
}
