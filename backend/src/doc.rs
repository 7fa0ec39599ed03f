//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the search endpoint, the health checks, the user
//! schemas and the `AccessToken` header security scheme. The document is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::wire::ACCESS_TOKEN_HEADER;
use crate::domain::{Gender, User};

/// Name of the security scheme in the generated document.
pub const ACCESS_TOKEN_SCHEME: &str = "AccessToken";

/// Enrich the generated document with the access token header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            ACCESS_TOKEN_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                ACCESS_TOKEN_HEADER,
                "Shared access token; any other value is answered with 401.",
            ))),
        );
    }
}

/// OpenAPI document for the search API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "User search API",
        description = "Token-protected user search with filtering, ordering and pagination."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("AccessToken" = [])),
    paths(
        crate::inbound::http::search::search_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Gender)),
    tags(
        (name = "search", description = "User search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
