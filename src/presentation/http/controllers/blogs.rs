// src/presentation/http/controllers/blogs.rs
use crate::application::{
    commands::blogs::{CreateBlogCommand, EditBlogCommand},
    dto::{BlogDto, PublishedBlogDto},
    queries::blogs::{GetOwnedBlogQuery, GetPublishedBlogQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, PathParam};
use crate::presentation::http::openapi::BlogListResponse;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::nullable;

/// Any `published` key in the payload is ignored; new blogs start as drafts.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl CreateBlogRequest {
    fn validate(&self) -> HttpResult<()> {
        validation::title(&self.title)?;
        validation::summary(&self.summary)?;
        validation::content(&self.content)?;
        validation::optional_url("cover_url", self.cover_url.as_deref())
    }
}

/// Partial edit. `cover_url: null` clears the cover.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EditBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub cover_url: Option<Option<String>>,
}

impl EditBlogRequest {
    fn validate(&self) -> HttpResult<()> {
        if self.title.is_none()
            && self.summary.is_none()
            && self.content.is_none()
            && self.cover_url.is_none()
        {
            return Err(HttpError::bad_request(
                "at least one of title, summary, content or cover_url is required",
            ));
        }
        if let Some(title) = &self.title {
            validation::title(title)?;
        }
        if let Some(summary) = &self.summary {
            validation::summary(summary)?;
        }
        if let Some(content) = &self.content {
            validation::content(content)?;
        }
        if let Some(cover_url) = &self.cover_url {
            validation::optional_url("cover_url", cover_url.as_deref())?;
        }
        Ok(())
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs",
    responses(
        (status = 200, description = "Published blogs, newest first, without content.", body = BlogListResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Blogs"
)]
pub async fn list_published_blogs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<BlogListResponse>> {
    state
        .services
        .blog_queries
        .list_published_blogs()
        .await
        .into_http()
        .map(|list| Json(list.into()))
}

/// Lists every author's blogs, drafts included, for any signed-in caller.
#[utoipa::path(
    get,
    path = "/api/v1/blogs/all",
    description = "Every blog regardless of state or author, without content. Open to any authenticated caller; no ownership or role check applies.",
    responses(
        (status = 200, description = "Every blog regardless of state, without content.", body = BlogListResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn list_all_blogs(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<BlogListResponse>> {
    state
        .services
        .blog_queries
        .list_blogs()
        .await
        .into_http()
        .map(|list| Json(list.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/blogs/{id}",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Published blog with its author.", body = PublishedBlogDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No published blog with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Blogs"
)]
pub async fn get_published_blog(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<PublishedBlogDto>> {
    state
        .services
        .blog_queries
        .get_published_blog(GetPublishedBlogQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Draft created.", body = BlogDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn create_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateBlogRequest>,
) -> HttpResult<(StatusCode, Json<BlogDto>)> {
    payload.validate()?;

    let command = CreateBlogCommand {
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        cover_url: payload.cover_url,
    };

    state
        .services
        .blog_commands
        .create_blog(&user, command)
        .await
        .into_http()
        .map(|blog| (StatusCode::CREATED, Json(blog)))
}

#[utoipa::path(
    get,
    path = "/api/v1/me/blogs",
    responses(
        (status = 200, description = "The caller's blogs, drafts included, without content.", body = BlogListResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn list_my_blogs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<BlogListResponse>> {
    state
        .services
        .blog_queries
        .list_my_blogs(&user)
        .await
        .into_http()
        .map(|list| Json(list.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/me/blogs/{id}",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Full blog, content included.", body = BlogDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Absent, or not the caller's.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn get_my_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_queries
        .get_owned_blog(&user, GetOwnedBlogQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/me/blogs/{id}",
    params(("id" = i64, Path, description = "Blog identifier")),
    request_body = EditBlogRequest,
    responses(
        (status = 200, description = "Updated blog.", body = BlogDto),
        (status = 400, description = "Malformed identifier or validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Absent, or not the caller's.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn edit_my_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    Json(payload): Json<EditBlogRequest>,
) -> HttpResult<Json<BlogDto>> {
    payload.validate()?;

    let command = EditBlogCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        cover_url: payload.cover_url,
    };

    state
        .services
        .blog_commands
        .edit_blog(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/me/blogs/{id}/publish",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Blog is published.", body = BlogDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Absent, or not the caller's.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn publish_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_commands
        .publish_blog(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/me/blogs/{id}/unpublish",
    params(("id" = i64, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Blog is back to draft.", body = BlogDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Absent, or not the caller's.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Blogs"
)]
pub async fn unpublish_blog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<BlogDto>> {
    state
        .services
        .blog_commands
        .unpublish_blog(&user, id)
        .await
        .into_http()
        .map(Json)
}
