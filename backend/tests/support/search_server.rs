//! Live servers for driving the HTTP client end to end.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use reqwest::Url;
use user_search::Trace;
use user_search::domain::QueryResolver;
use user_search::inbound::http::auth::AccessToken;
use user_search::inbound::http::search::search_users;
use user_search::inbound::http::state::HttpState;
use user_search::outbound::dataset::load_users_from_path;

pub const ACCESS_TOKEN: &str = "1234567890";

/// A server listening on an ephemeral local port.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl RunningServer {
    fn start(addr: SocketAddr, server: actix_web::dev::Server) -> Self {
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self { addr, handle }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).expect("server url")
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("dataset.xml")
}

/// Resolver over the bundled dataset.
pub fn dataset_resolver() -> QueryResolver {
    let store = load_users_from_path(dataset_path()).expect("fixture dataset loads");
    QueryResolver::new(Arc::new(store))
}

/// Serve `resolver` behind the search handler.
pub fn spawn_search_server(resolver: QueryResolver) -> RunningServer {
    let state = web::Data::new(HttpState::new(resolver, AccessToken::new(ACCESS_TOKEN)));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .service(search_users)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind search server");
    let addr = server.addrs()[0];
    RunningServer::start(addr, server.run())
}

/// Canned behaviour for a stub endpoint.
#[derive(Debug, Clone)]
pub enum StubReply {
    Respond {
        status: StatusCode,
        body: &'static str,
    },
    Stall(Duration),
}

async fn stub_handler(reply: web::Data<StubReply>) -> HttpResponse {
    match reply.get_ref() {
        StubReply::Respond { status, body } => HttpResponse::build(*status)
            .content_type("application/json")
            .body(*body),
        StubReply::Stall(delay) => {
            actix_web::rt::time::sleep(*delay).await;
            HttpResponse::Ok().content_type("application/json").body("[]")
        }
    }
}

/// Serve `reply` for every request.
pub fn spawn_stub(reply: StubReply) -> RunningServer {
    let shared_reply = web::Data::new(reply);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared_reply.clone())
            .default_service(web::to(stub_handler))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind stub server");
    let addr = server.addrs()[0];
    RunningServer::start(addr, server.run())
}

/// A local URL nothing listens on.
pub fn unreachable_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("unreachable url")
}
