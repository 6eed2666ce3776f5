use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{BlogEdit, BlogId},
};

/// Content edit. Publication state and authorship cannot be expressed here.
pub struct EditBlogCommand {
    pub id: i64,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_url: Option<Option<String>>,
}

impl BlogCommandService {
    #[tracing::instrument(skip_all, fields(blog_id = command.id, actor_id = %actor.id))]
    pub async fn edit_blog(
        &self,
        actor: &AuthenticatedUser,
        command: EditBlogCommand,
    ) -> ApplicationResult<BlogDto> {
        let EditBlogCommand {
            id,
            title,
            summary,
            content,
            cover_url,
        } = command;

        let id = BlogId::new(id)?;
        let edit = BlogEdit {
            title,
            summary,
            content,
            cover_url,
        };
        if edit.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let mut blog = self.load_owned(actor, id).await?;
        blog.apply_edit(edit, self.clock.now());
        self.write_repo.save(&blog).await?;
        Ok(blog.into())
    }
}
