use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserUpdate, Username},
};

pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub picture_url: Option<Option<String>>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let current = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(current.id);

        if let Some(raw) = command.username {
            let username = Username::new(raw)?;
            if username != current.username {
                if self.user_repo.find_by_username(&username).await?.is_some() {
                    return Err(ApplicationError::conflict("username already exists"));
                }
                update = update.with_username(username);
            }
        }

        if let Some(picture_url) = command.picture_url {
            update = update.with_picture_url(picture_url);
        }

        if update.is_empty() {
            return Ok(current.into());
        }

        let updated = self.user_repo.update(update).await?;
        Ok(updated.into())
    }
}
