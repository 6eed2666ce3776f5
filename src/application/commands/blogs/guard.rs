// src/application/commands/blogs/guard.rs
use super::BlogCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{Blog, BlogAccess, BlogFilter, BlogId},
};

impl BlogCommandService {
    /// Loads a blog in any publication state and keeps it only if `actor`
    /// wrote it.
    pub(super) async fn load_owned(
        &self,
        actor: &AuthenticatedUser,
        id: BlogId,
    ) -> ApplicationResult<Blog> {
        let found = self.read_repo.find_one(BlogFilter::any().with_id(id)).await?;

        match BlogAccess::resolve(found, actor.id) {
            BlogAccess::Granted(blog) => Ok(blog),
            BlogAccess::NotFound => Err(ApplicationError::blog_not_found()),
        }
    }
}
