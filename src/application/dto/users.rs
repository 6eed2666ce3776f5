use crate::domain::user::{AuthProvider, SafeUser, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The caller's own account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub provider: AuthProvider,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            provider: user.provider,
            picture_url: user.picture_url,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SafeUserDto {
    pub id: i64,
    pub username: String,
    pub picture_url: Option<String>,
}

impl From<SafeUser> for SafeUserDto {
    fn from(user: SafeUser) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            picture_url: user.picture_url,
        }
    }
}

impl From<User> for SafeUserDto {
    fn from(user: User) -> Self {
        SafeUser::from(user).into()
    }
}
