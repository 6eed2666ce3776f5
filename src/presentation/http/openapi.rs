// src/presentation/http/openapi.rs
use crate::application::dto::{ListDto, SafeBlogDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlogListResponse {
    pub items: Vec<SafeBlogDto>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsernameListResponse {
    pub items: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsernameExistsResponse {
    pub username: String,
    pub exists: bool,
}

impl From<ListDto<SafeBlogDto>> for BlogListResponse {
    fn from(list: ListDto<SafeBlogDto>) -> Self {
        Self {
            items: list.items,
            total: list.total,
        }
    }
}

impl From<ListDto<String>> for UsernameListResponse {
    fn from(list: ListDto<String>) -> Self {
        Self {
            items: list.items,
            total: list.total,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::google_login,
        crate::presentation::http::controllers::auth::google_callback,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::auth::update_profile,
        crate::presentation::http::controllers::users::list_usernames,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::username_exists,
        crate::presentation::http::controllers::blogs::list_published_blogs,
        crate::presentation::http::controllers::blogs::list_all_blogs,
        crate::presentation::http::controllers::blogs::get_published_blog,
        crate::presentation::http::controllers::blogs::create_blog,
        crate::presentation::http::controllers::blogs::list_my_blogs,
        crate::presentation::http::controllers::blogs::get_my_blog,
        crate::presentation::http::controllers::blogs::edit_my_blog,
        crate::presentation::http::controllers::blogs::publish_blog,
        crate::presentation::http::controllers::blogs::unpublish_blog,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            BlogListResponse,
            UsernameListResponse,
            UsernameExistsResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::UpdateProfileRequest,
            crate::presentation::http::controllers::blogs::CreateBlogRequest,
            crate::presentation::http::controllers::blogs::EditBlogRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::SignInDto,
            crate::application::dto::UserDto,
            crate::application::dto::SafeUserDto,
            crate::application::dto::BlogDto,
            crate::application::dto::SafeBlogDto,
            crate::application::dto::PublishedBlogDto,
            crate::domain::user::AuthProvider
        )
    ),
    tags(
        (name = "Auth", description = "Google sign-in and the caller's account"),
        (name = "Users", description = "Public user lookups"),
        (name = "Blogs", description = "Blog authoring and publication"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Resdev API",
        description = "Blog publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push(DEFAULT_SERVER_URL.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, the document at `/openapi.json`.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
