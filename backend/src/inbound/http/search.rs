//! Search endpoint handler.
//!
//! ```text
//! GET /?query=Aguilar&order_field=Name&order_by=-1&limit=10&offset=0
//! AccessToken: 1234567890
//! ```

use actix_web::{HttpRequest, get, web};

use super::ApiResult;
use super::auth::require_access_token;
use super::error::ApiError;
use super::state::HttpState;
use crate::domain::{RawSearchParams, User};

/// Search users.
///
/// The credential is checked before the query string is even decoded, so a
/// request with a bad credential is always answered with `401`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_search::inbound::http::search::search_users;
///
/// let app = App::new().service(search_users);
/// ```
#[utoipa::path(
    get,
    path = "/",
    params(RawSearchParams),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 400, description = "Invalid parameters; `error` is `ErrorBadOrderField` or `user_read_error`"),
        (status = 401, description = "Missing or wrong access token")
    ),
    tags = ["search"],
    operation_id = "searchUsers"
)]
#[get("/")]
pub async fn search_users(
    request: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<User>>> {
    require_access_token(&request, &state.access_token)?;
    let raw = web::Query::<RawSearchParams>::from_query(request.query_string())
        .map_err(|err| ApiError::MalformedQuery(err.to_string()))?
        .into_inner();
    let page = state.resolver.resolve_raw(raw)?;
    Ok(web::Json(page.users))
}
