// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{AUTHORIZATION_TTL_MINUTES, UpdateProfileCommand},
    dto::{SignInDto, UserDto},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation;
use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect},
};
use headers::{Cookie, HeaderMapExt};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::nullable;

pub const STATE_COOKIE: &str = "oauth_state";
const COOKIE_PATH: &str = "/api/v1/auth/google";

/// Binds the pending sign-in to the browser that started it. The verifier
/// never leaves the server.
fn state_cookie(value: &str, max_age: i64) -> String {
    format!("{STATE_COOKIE}={value}; Path={COOKIE_PATH}; Max-Age={max_age}; HttpOnly; SameSite=Lax")
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GoogleCallbackParams {
    /// Authorization code issued by Google.
    pub code: Option<String>,
    /// CSRF state echoed back by Google.
    pub state: Option<String>,
    /// Set when the user declined consent.
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub picture_url: Option<Option<String>>,
}

impl UpdateProfileRequest {
    fn validate(&self) -> HttpResult<()> {
        if self.username.is_none() && self.picture_url.is_none() {
            return Err(HttpError::bad_request(
                "at least one of username or picture_url is required",
            ));
        }
        if let Some(username) = &self.username {
            validation::username(username)?;
        }
        if let Some(picture_url) = &self.picture_url {
            validation::optional_url("picture_url", picture_url.as_deref())?;
        }
        Ok(())
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/google",
    responses(
        (status = 303, description = "Redirect to the Google consent screen; sets the state cookie."),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn google_login(Extension(state): Extension<HttpState>) -> HttpResult<impl IntoResponse> {
    let redirect = state
        .services
        .user_commands
        .begin_provider_sign_in()
        .await
        .into_http()?;

    Ok((
        AppendHeaders([(
            SET_COOKIE,
            state_cookie(&redirect.state, AUTHORIZATION_TTL_MINUTES * 60),
        )]),
        Redirect::to(&redirect.url),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/google/callback",
    params(GoogleCallbackParams),
    responses(
        (status = 200, description = "Signed in; the account is created on first sign-in.", body = SignInDto),
        (status = 401, description = "Unknown, expired, reused or mismatched state, declined consent or failed exchange.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn google_callback(
    Extension(state): Extension<HttpState>,
    Query(params): Query<GoogleCallbackParams>,
    headers: HeaderMap,
) -> HttpResult<impl IntoResponse> {
    if let Some(error) = params.error {
        return Err(HttpError::unauthorized(format!(
            "google sign-in was not completed: {error}"
        )));
    }
    let code = params
        .code
        .ok_or_else(|| HttpError::unauthorized("missing authorization code"))?;
    let returned_state = params
        .state
        .ok_or_else(|| HttpError::unauthorized("missing oauth state"))?;

    let expected_state = headers
        .typed_get::<Cookie>()
        .and_then(|cookies| cookies.get(STATE_COOKIE).map(str::to_owned))
        .ok_or_else(|| HttpError::unauthorized("oauth flow was not started"))?;
    if expected_state != returned_state {
        tracing::warn!("oauth state mismatch on callback");
        return Err(HttpError::unauthorized("oauth state mismatch"));
    }

    let signed_in = state
        .services
        .user_commands
        .complete_provider_sign_in(&returned_state, &code)
        .await
        .into_http()?;

    Ok((
        AppendHeaders([(SET_COOKIE, state_cookie("", 0))]),
        Json(signed_in),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The caller's own account.", body = UserDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/auth/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated account.", body = UserDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Username already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    payload.validate()?;

    let command = UpdateProfileCommand {
        username: payload.username,
        picture_url: payload.picture_url,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}
