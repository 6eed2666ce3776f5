use super::UserCommandService;
use crate::{
    application::{
        dto::{SignInDto, TokenSubject},
        error::ApplicationResult,
        ports::identity::ProviderProfile,
    },
    domain::user::User,
};

const REGISTRATION_ATTEMPTS: usize = 3;

impl UserCommandService {
    pub async fn sign_in_with_provider(
        &self,
        profile: &ProviderProfile,
    ) -> ApplicationResult<SignInDto> {
        let (user, created) = self.resolve_or_register(profile).await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                username: user.username.to_string(),
            })
            .await?;

        tracing::info!(user_id = %user.id, created, "provider sign-in completed");
        Ok(SignInDto {
            token,
            user: user.into(),
            created,
        })
    }

    /// A conflicting insert means another request registered this identity or
    /// took the chosen username first; the lookup is repeated before retrying.
    async fn resolve_or_register(&self, profile: &ProviderProfile) -> ApplicationResult<(User, bool)> {
        let mut attempt = 0;
        loop {
            attempt += 1;

            if let Some(user) = self
                .user_repo
                .find_by_provider(profile.provider, &profile.subject)
                .await?
            {
                return Ok((user, false));
            }

            match self.register_from_provider(profile).await {
                Ok(user) => return Ok((user, true)),
                Err(err) if err.is_conflict() && attempt < REGISTRATION_ATTEMPTS => {
                    tracing::debug!(attempt, error = %err, "registration conflicted, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}
