use super::BlogQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ListDto, SafeBlogDto},
        error::ApplicationResult,
    },
    domain::blog::ReadIntent,
};

impl BlogQueryService {
    /// Every blog regardless of state, without content.
    pub async fn list_blogs(&self) -> ApplicationResult<ListDto<SafeBlogDto>> {
        self.list(ReadIntent::ListAll).await
    }

    pub async fn list_published_blogs(&self) -> ApplicationResult<ListDto<SafeBlogDto>> {
        self.list(ReadIntent::ListPublished).await
    }

    /// The caller's blogs, drafts included, without content.
    pub async fn list_my_blogs(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ListDto<SafeBlogDto>> {
        self.list(ReadIntent::ListOwned(actor.id)).await
    }

    async fn list(&self, intent: ReadIntent) -> ApplicationResult<ListDto<SafeBlogDto>> {
        let rows = self.read_repo.find(intent.filter()).await?;
        Ok(intent
            .restrict(rows)
            .into_iter()
            .map(SafeBlogDto::from)
            .collect())
    }
}
