use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogAccess, BlogId, ReadIntent},
};

pub struct GetOwnedBlogQuery {
    pub id: i64,
}

impl BlogQueryService {
    /// The author's own fetch: any publication state, content included.
    pub async fn get_owned_blog(
        &self,
        actor: &AuthenticatedUser,
        query: GetOwnedBlogQuery,
    ) -> ApplicationResult<BlogDto> {
        let intent = ReadIntent::OwnedById {
            id: BlogId::new(query.id)?,
            caller: actor.id,
        };
        let found = self.read_repo.find_one(intent.filter()).await?;

        match BlogAccess::resolve(found, actor.id) {
            BlogAccess::Granted(blog) => Ok(blog.into()),
            BlogAccess::NotFound => Err(ApplicationError::blog_not_found()),
        }
    }
}
