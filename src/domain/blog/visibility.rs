// src/domain/blog/visibility.rs
//! Which blog rows and which blog fields a read may expose.
//!
//! Every read path is described by a [`ReadIntent`]. The intent yields the
//! gateway filter and the row predicate for that path; the field projection
//! is expressed by the type the path returns (`Blog` only for the owner's own
//! fetch, [`SafeBlog`] everywhere else).
use crate::domain::blog::entity::Blog;
use crate::domain::blog::repository::BlogFilter;
use crate::domain::blog::value_objects::BlogId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A blog without its `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeBlog {
    pub id: BlogId,
    pub title: String,
    pub summary: String,
    pub cover_url: Option<String>,
    pub published: bool,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for SafeBlog {
    fn from(blog: Blog) -> Self {
        let Blog {
            id,
            title,
            summary,
            content: _,
            cover_url,
            published,
            author_id,
            created_at,
            updated_at,
        } = blog;

        Self {
            id,
            title,
            summary,
            cover_url,
            published,
            author_id,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadIntent {
    ListAll,
    ListPublished,
    ListOwned(UserId),
    PublishedById(BlogId),
    OwnedById { id: BlogId, caller: UserId },
}

impl ReadIntent {
    pub fn filter(&self) -> BlogFilter {
        match *self {
            Self::ListAll => BlogFilter::any(),
            Self::ListPublished => BlogFilter::any().published_only(),
            Self::ListOwned(caller) => BlogFilter::any().with_author(caller),
            Self::PublishedById(id) => BlogFilter::any().with_id(id).published_only(),
            Self::OwnedById { id, .. } => BlogFilter::any().with_id(id),
        }
    }

    pub fn admits(&self, blog: &SafeBlog) -> bool {
        self.filter()
            .matches(blog.id, blog.author_id, blog.published)
    }

    /// Keeps only rows the intent admits.
    pub fn restrict(&self, rows: Vec<SafeBlog>) -> Vec<SafeBlog> {
        rows.into_iter().filter(|row| self.admits(row)).collect()
    }
}
