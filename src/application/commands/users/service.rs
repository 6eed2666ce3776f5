use std::sync::Arc;

use crate::application::ports::{
    identity::IdentityProvider, oauth_state::OAuthStateStore, security::TokenManager, time::Clock,
};
use crate::domain::user::{UserRepository, UsernameService};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) username_service: Arc<UsernameService>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) identity_provider: Arc<dyn IdentityProvider>,
    pub(super) oauth_states: Arc<dyn OAuthStateStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        username_service: Arc<UsernameService>,
        token_manager: Arc<dyn TokenManager>,
        identity_provider: Arc<dyn IdentityProvider>,
        oauth_states: Arc<dyn OAuthStateStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            username_service,
            token_manager,
            identity_provider,
            oauth_states,
            clock,
        }
    }
}
