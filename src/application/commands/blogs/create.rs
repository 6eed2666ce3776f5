use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::ApplicationResult,
    },
    domain::blog::NewBlog,
};

/// Payload for a new blog. It has no publication flag: new blogs are drafts.
pub struct CreateBlogCommand {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_url: Option<String>,
}

impl BlogCommandService {
    #[tracing::instrument(skip_all, fields(author_id = %actor.id))]
    pub async fn create_blog(
        &self,
        actor: &AuthenticatedUser,
        command: CreateBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        let CreateBlogCommand {
            title,
            summary,
            content,
            cover_url,
        } = command;

        let draft = NewBlog::draft(title, summary, content, cover_url, actor.id, self.clock.now());
        let created = self.write_repo.insert(draft).await?;
        tracing::info!(blog_id = %created.id, "blog created");
        Ok(created.into())
    }
}
