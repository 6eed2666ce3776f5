// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, blogs, users},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/google", get(auth::google_login))
        .route("/api/v1/auth/google/callback", get(auth::google_callback))
        .route(
            "/api/v1/auth/me",
            get(auth::profile).patch(auth::update_profile),
        )
        .route("/api/v1/users", get(users::list_usernames))
        .route("/api/v1/users/{username}", get(users::get_user))
        .route(
            "/api/v1/users/{username}/exists",
            get(users::username_exists),
        )
        .route(
            "/api/v1/blogs",
            get(blogs::list_published_blogs).post(blogs::create_blog),
        )
        .route("/api/v1/blogs/all", get(blogs::list_all_blogs))
        .route("/api/v1/blogs/{id}", get(blogs::get_published_blog))
        .route("/api/v1/me/blogs", get(blogs::list_my_blogs))
        .route(
            "/api/v1/me/blogs/{id}",
            get(blogs::get_my_blog).patch(blogs::edit_my_blog),
        )
        .route("/api/v1/me/blogs/{id}/publish", post(blogs::publish_blog))
        .route(
            "/api/v1/me/blogs/{id}/unpublish",
            post(blogs::unpublish_blog),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
