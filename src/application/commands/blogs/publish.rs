use super::BlogCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, BlogDto},
        error::ApplicationResult,
    },
    domain::blog::{BlogId, PublicationTransition},
};

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl BlogCommandService {
    #[tracing::instrument(skip_all, fields(blog_id = command.id, actor_id = %actor.id, publish = command.publish))]
    pub async fn set_publish_state(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<BlogDto> {
        let id = BlogId::new(command.id)?;
        let mut blog = self.load_owned(actor, id).await?;

        let transition = PublicationTransition::from_flag(command.publish);
        if !blog.apply_transition(transition, self.clock.now()) {
            return Ok(blog.into());
        }

        self.write_repo.save(&blog).await?;
        tracing::info!(state = %blog.publication_state(), "publication state changed");
        Ok(blog.into())
    }

    pub async fn publish_blog(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<BlogDto> {
        self.set_publish_state(actor, SetPublishStateCommand { id, publish: true })
            .await
    }

    pub async fn unpublish_blog(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<BlogDto> {
        self.set_publish_state(actor, SetPublishStateCommand { id, publish: false })
            .await
    }
}
