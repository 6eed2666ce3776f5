use super::UserQueryService;
use crate::{
    application::{
        dto::{ListDto, SafeUserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User, UserId, Username},
};

impl UserQueryService {
    pub async fn find_by_id(&self, id: i64) -> ApplicationResult<SafeUserDto> {
        let id = UserId::new(id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .map(SafeUserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    pub async fn find_by_username(&self, username: &str) -> ApplicationResult<SafeUserDto> {
        let Ok(username) = Username::new(username) else {
            return Err(ApplicationError::not_found("user not found"));
        };
        self.user_repo
            .find_by_username(&username)
            .await?
            .map(SafeUserDto::from)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    /// Full record, for internal callers only.
    pub async fn find_by_email(&self, email: &str) -> ApplicationResult<User> {
        let email = Email::new(email)?;
        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    /// Malformed names cannot exist, so they report `false` rather than an error.
    pub async fn username_exists(&self, username: &str) -> ApplicationResult<bool> {
        let Ok(username) = Username::new(username) else {
            return Ok(false);
        };
        Ok(self.user_repo.find_by_username(&username).await?.is_some())
    }

    pub async fn list_usernames(&self) -> ApplicationResult<ListDto<String>> {
        let usernames = self.user_repo.list_usernames().await?;
        Ok(usernames.into_iter().map(String::from).collect())
    }
}
