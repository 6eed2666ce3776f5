// tests/support/mocks/oauth_state.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use resdev_core::application::ApplicationResult;
use resdev_core::application::ports::oauth_state::{OAuthStateStore, PendingAuthorization};
use resdev_core::domain::user::AuthProvider;

#[derive(Default)]
pub struct InMemoryOAuthStateStore {
    pending: Mutex<HashMap<String, PendingAuthorization>>,
}

impl InMemoryOAuthStateStore {
    /// Stores a Google flow for `state` directly, bypassing the login step.
    pub fn put(&self, state: &str, verifier: &str, expires_at: DateTime<Utc>) {
        self.pending.lock().unwrap().insert(
            state.to_string(),
            PendingAuthorization {
                state: state.to_string(),
                provider: AuthProvider::Google,
                pkce_verifier: verifier.to_string(),
                expires_at,
            },
        );
    }

    pub fn get(&self, state: &str) -> Option<PendingAuthorization> {
        self.pending.lock().unwrap().get(state).cloned()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap().len()
    }
}

#[async_trait]
impl OAuthStateStore for InMemoryOAuthStateStore {
    async fn save(&self, pending: PendingAuthorization) -> ApplicationResult<()> {
        self.pending
            .lock()
            .unwrap()
            .insert(pending.state.clone(), pending);
        Ok(())
    }

    async fn consume(
        &self,
        provider: AuthProvider,
        state: &str,
    ) -> ApplicationResult<Option<PendingAuthorization>> {
        let mut pending = self.pending.lock().unwrap();
        match pending.get(state) {
            Some(entry) if entry.provider == provider => Ok(pending.remove(state)),
            _ => Ok(None),
        }
    }
}
