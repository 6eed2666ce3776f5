use super::BlogQueryService;
use crate::{
    application::{
        dto::{PublishedBlogDto, SafeBlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogId, ReadIntent, SafeBlog},
};

pub struct GetPublishedBlogQuery {
    pub id: i64,
}

impl BlogQueryService {
    /// Public detail of a published blog.
    ///
    /// A failed author lookup is reported as a missing blog; the underlying
    /// cause only reaches the log.
    #[tracing::instrument(skip_all, fields(blog_id = query.id))]
    pub async fn get_published_blog(
        &self,
        query: GetPublishedBlogQuery,
    ) -> ApplicationResult<PublishedBlogDto> {
        let intent = ReadIntent::PublishedById(BlogId::new(query.id)?);

        let blog = self
            .read_repo
            .find_one(intent.filter())
            .await?
            .map(SafeBlog::from)
            .filter(|blog| intent.admits(blog))
            .ok_or_else(ApplicationError::blog_not_found)?;

        let author = match self.user_repo.find_by_id(blog.author_id).await {
            Ok(Some(author)) => author,
            Ok(None) => {
                tracing::warn!(author_id = %blog.author_id, "author of published blog is missing");
                return Err(ApplicationError::blog_not_found());
            }
            Err(err) => {
                tracing::warn!(author_id = %blog.author_id, error = %err, "author lookup failed");
                return Err(ApplicationError::blog_not_found());
            }
        };

        Ok(PublishedBlogDto {
            blog: SafeBlogDto::from(blog),
            author: author.to_safe().into(),
        })
    }
}
