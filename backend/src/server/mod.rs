//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use user_search::Trace;
use user_search::inbound::http::health::{HealthState, live, ready};
use user_search::inbound::http::search::search_users;
use user_search::inbound::http::state::HttpState;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(search_users)
}

/// Construct an Actix HTTP server serving search and health checks.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready once bound.
/// - `http_state`: resolver and expected access token for the search handler.
/// - `bind_addr`: socket address to listen on.
/// - `workers`: number of worker threads.
///
/// # Returns
/// A running [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: &web::Data<HealthState>,
    http_state: HttpState,
    bind_addr: SocketAddr,
    workers: usize,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let shared_http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), shared_http_state.clone())
    })
    .workers(workers)
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
