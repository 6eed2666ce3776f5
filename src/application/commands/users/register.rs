use super::UserCommandService;
use crate::{
    application::{error::ApplicationResult, ports::identity::ProviderProfile},
    domain::user::{Email, NewUser, User},
};

impl UserCommandService {
    /// Creates the account for a provider identity seen for the first time.
    #[tracing::instrument(skip_all, fields(provider = %profile.provider))]
    pub async fn register_from_provider(&self, profile: &ProviderProfile) -> ApplicationResult<User> {
        let email = Email::new(profile.email.clone())?;
        let username = self
            .username_service
            .generate_unique(&profile.given_name)
            .await?;

        let new_user = NewUser {
            username,
            email,
            provider: profile.provider,
            provider_id: profile.subject.clone(),
            picture_url: profile.picture_url.clone(),
            created_at: self.clock.now(),
        };

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }
}
