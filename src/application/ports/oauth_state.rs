// src/application/ports/oauth_state.rs
use crate::application::ApplicationResult;
use crate::domain::user::AuthProvider;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// An authorization redirect that has not come back yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAuthorization {
    pub state: String,
    pub provider: AuthProvider,
    pub pkce_verifier: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait OAuthStateStore: Send + Sync {
    async fn save(&self, pending: PendingAuthorization) -> ApplicationResult<()>;

    /// Removes the entry for `state` and returns it, whether or not it has expired.
    async fn consume(
        &self,
        provider: AuthProvider,
        state: &str,
    ) -> ApplicationResult<Option<PendingAuthorization>>;
}
