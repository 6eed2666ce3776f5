use super::UserCommandService;
use crate::application::{
    dto::SignInDto,
    error::{ApplicationError, ApplicationResult},
    ports::oauth_state::PendingAuthorization,
};
use chrono::Duration;

pub const AUTHORIZATION_TTL_MINUTES: i64 = 10;

/// Where the browser goes next, and the state it will bring back.
#[derive(Debug, Clone)]
pub struct SignInRedirect {
    pub url: String,
    pub state: String,
}

impl UserCommandService {
    /// Starts a provider sign-in. The PKCE verifier stays server side until
    /// the callback consumes it.
    pub async fn begin_provider_sign_in(&self) -> ApplicationResult<SignInRedirect> {
        let request = self.identity_provider.authorization_request()?;

        self.oauth_states
            .save(PendingAuthorization {
                state: request.csrf_state.clone(),
                provider: self.identity_provider.provider(),
                pkce_verifier: request.pkce_verifier,
                expires_at: self.clock.now() + Duration::minutes(AUTHORIZATION_TTL_MINUTES),
            })
            .await?;

        Ok(SignInRedirect {
            url: request.url,
            state: request.csrf_state,
        })
    }

    /// Finishes a provider sign-in. Each state is accepted once, before it expires.
    #[tracing::instrument(skip_all)]
    pub async fn complete_provider_sign_in(
        &self,
        state: &str,
        code: &str,
    ) -> ApplicationResult<SignInDto> {
        let pending = self
            .oauth_states
            .consume(self.identity_provider.provider(), state)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown oauth state"))?;

        if pending.expires_at <= self.clock.now() {
            tracing::debug!("oauth state expired before the callback");
            return Err(ApplicationError::unauthorized("oauth state expired"));
        }

        let profile = self
            .identity_provider
            .exchange(code, &pending.pkce_verifier)
            .await?;

        self.sign_in_with_provider(&profile).await
    }
}
