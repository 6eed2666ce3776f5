// tests/support/mocks/identity.rs
use async_trait::async_trait;
use std::sync::Mutex;

use resdev_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::identity::{AuthorizationRequest, IdentityProvider, ProviderProfile},
};
use resdev_core::domain::user::AuthProvider;

pub const GOOD_CODE: &str = "good-code";
pub const STATE: &str = "fixed-state";
pub const VERIFIER: &str = "fixed-verifier";

pub fn google_profile(subject: &str, given_name: &str) -> ProviderProfile {
    ProviderProfile {
        provider: AuthProvider::Google,
        subject: subject.into(),
        email: format!("{subject}@example.com"),
        given_name: given_name.into(),
        picture_url: Some(format!("https://img.example.com/{subject}.png")),
    }
}

/// Accepts [`GOOD_CODE`] with [`VERIFIER`] and answers with the configured profile.
pub struct StubIdentityProvider {
    profile: Mutex<ProviderProfile>,
}

impl StubIdentityProvider {
    pub fn new(profile: ProviderProfile) -> Self {
        Self {
            profile: Mutex::new(profile),
        }
    }

    pub fn set_profile(&self, profile: ProviderProfile) {
        *self.profile.lock().unwrap() = profile;
    }
}

impl Default for StubIdentityProvider {
    fn default() -> Self {
        Self::new(google_profile("google-sub-1", "Jane Doe"))
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_request(&self) -> ApplicationResult<AuthorizationRequest> {
        Ok(AuthorizationRequest {
            url: format!("https://accounts.example.com/auth?state={STATE}"),
            csrf_state: STATE.into(),
            pkce_verifier: VERIFIER.into(),
        })
    }

    async fn exchange(&self, code: &str, pkce_verifier: &str) -> ApplicationResult<ProviderProfile> {
        if code != GOOD_CODE || pkce_verifier != VERIFIER {
            return Err(ApplicationError::unauthorized("code exchange failed"));
        }
        Ok(self.profile.lock().unwrap().clone())
    }
}
