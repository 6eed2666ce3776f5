// src/application/ports/identity.rs
use crate::application::ApplicationResult;
use crate::domain::user::AuthProvider;
use async_trait::async_trait;

/// Where to send the browser, plus the secrets the callback must echo back.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub csrf_state: String,
    pub pkce_verifier: String,
}

/// Profile returned by the provider once the authorization code is exchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    pub subject: String,
    pub email: String,
    pub given_name: String,
    pub picture_url: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> AuthProvider;

    fn authorization_request(&self) -> ApplicationResult<AuthorizationRequest>;

    async fn exchange(&self, code: &str, pkce_verifier: &str) -> ApplicationResult<ProviderProfile>;
}
