// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use resdev_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use resdev_core::domain::user::UserId;

pub const ALICE_TOKEN: &str = "token-1";
pub const BOB_TOKEN: &str = "token-2";

pub fn actor(id: i64) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: format!("user{id}"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Tokens are `token-<user id>`; anything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct StubTokenManager;

#[async_trait]
impl TokenManager for StubTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        token
            .strip_prefix("token-")
            .and_then(|id| id.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(actor)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
