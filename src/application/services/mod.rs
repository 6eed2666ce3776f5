// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{blogs::BlogCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            identity::IdentityProvider, oauth_state::OAuthStateStore, security::TokenManager,
            time::Clock, util::SuffixGenerator,
        },
        queries::{blogs::BlogQueryService, users::UserQueryService},
    },
    domain::{
        blog::{BlogReadRepository, BlogWriteRepository},
        user::{UserRepository, UsernameService},
    },
};

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        blog_write_repo: Arc<dyn BlogWriteRepository>,
        blog_read_repo: Arc<dyn BlogReadRepository>,
        token_manager: Arc<dyn TokenManager>,
        identity_provider: Arc<dyn IdentityProvider>,
        oauth_states: Arc<dyn OAuthStateStore>,
        clock: Arc<dyn Clock>,
        suffixes: Arc<dyn SuffixGenerator>,
    ) -> Self {
        let username_service = Arc::new(UsernameService::new(
            Arc::clone(&user_repo),
            Arc::clone(&suffixes),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&username_service),
            Arc::clone(&token_manager),
            identity_provider,
            oauth_states,
            Arc::clone(&clock),
        ));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&blog_write_repo),
            Arc::clone(&blog_read_repo),
            Arc::clone(&clock),
        ));

        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&blog_read_repo),
            Arc::clone(&user_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            blog_commands,
            blog_queries,
            user_commands,
            user_queries,
            token_manager,
        }
    }

    /// Resolves a bearer token to the calling user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
