// src/presentation/http/controllers/users.rs
use crate::application::dto::SafeUserDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{UsernameExistsResponse, UsernameListResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Every username, alphabetically.", body = UsernameListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Users"
)]
pub async fn list_usernames(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<UsernameListResponse>> {
    state
        .services
        .user_queries
        .list_usernames()
        .await
        .into_http()
        .map(|list| Json(list.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Public view of the user.", body = SafeUserDto),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<SafeUserDto>> {
    state
        .services
        .user_queries
        .find_by_username(&username)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/exists",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Whether the username is taken.", body = UsernameExistsResponse)
    ),
    security([]),
    tag = "Users"
)]
pub async fn username_exists(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<UsernameExistsResponse>> {
    let exists = state
        .services
        .user_queries
        .username_exists(&username)
        .await
        .into_http()?;

    Ok(Json(UsernameExistsResponse { username, exists }))
}
