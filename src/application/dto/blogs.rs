use crate::domain::blog::{Blog, SafeBlog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::users::SafeUserDto;

/// Full blog, returned only to its author.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title,
            summary: blog.summary,
            content: blog.content,
            cover_url: blog.cover_url,
            published: blog.published,
            author_id: blog.author_id.into(),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

/// Blog without `content`; what every listing returns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SafeBlogDto {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SafeBlog> for SafeBlogDto {
    fn from(blog: SafeBlog) -> Self {
        Self {
            id: blog.id.into(),
            title: blog.title,
            summary: blog.summary,
            cover_url: blog.cover_url,
            published: blog.published,
            author_id: blog.author_id.into(),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

/// Public detail of a published blog with its author attached.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishedBlogDto {
    #[serde(flatten)]
    pub blog: SafeBlogDto,
    pub author: SafeUserDto,
}
