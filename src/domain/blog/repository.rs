use crate::domain::blog::entity::{Blog, NewBlog};
use crate::domain::blog::value_objects::BlogId;
use crate::domain::blog::visibility::SafeBlog;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Row filter handed to the blog gateway. `None` means "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub id: Option<BlogId>,
    pub author_id: Option<UserId>,
    pub published: Option<bool>,
}

impl BlogFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: BlogId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn published_only(mut self) -> Self {
        self.published = Some(true);
        self
    }

    pub fn matches(&self, id: BlogId, author_id: UserId, published: bool) -> bool {
        self.id.is_none_or(|wanted| wanted == id)
            && self.author_id.is_none_or(|wanted| wanted == author_id)
            && self.published.is_none_or(|wanted| wanted == published)
    }
}

#[async_trait]
pub trait BlogReadRepository: Send + Sync {
    /// Projected listing; the content column is never loaded.
    async fn find(&self, filter: BlogFilter) -> DomainResult<Vec<SafeBlog>>;
    async fn find_one(&self, filter: BlogFilter) -> DomainResult<Option<Blog>>;
}

#[async_trait]
pub trait BlogWriteRepository: Send + Sync {
    async fn insert(&self, blog: NewBlog) -> DomainResult<Blog>;
    /// Writes every mutable column of `blog`. `author_id` is never written.
    async fn save(&self, blog: &Blog) -> DomainResult<()>;
}
