// src/domain/user/entity.rs
use crate::domain::user::value_objects::{AuthProvider, Email, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub provider: AuthProvider,
    pub provider_id: String,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn to_safe(&self) -> SafeUser {
        SafeUser {
            id: self.id,
            username: self.username.clone(),
            picture_url: self.picture_url.clone(),
        }
    }
}

/// Public view of a user, attached to published blogs as their author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeUser {
    pub id: UserId,
    pub username: Username,
    pub picture_url: Option<String>,
}

impl From<User> for SafeUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            picture_url: user.picture_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub provider: AuthProvider,
    pub provider_id: String,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub username: Option<Username>,
    pub picture_url: Option<Option<String>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: None,
            picture_url: None,
        }
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_picture_url(mut self, picture_url: Option<String>) -> Self {
        self.picture_url = Some(picture_url);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.picture_url.is_none()
    }
}
