// src/domain/user/services.rs
use std::sync::Arc;

use crate::application::ports::util::SuffixGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::Username;

pub const USERNAME_SUFFIX_LEN: usize = 7;
const MAX_ATTEMPTS: usize = 5;

/// Produces unique usernames of the form `<stem>_<suffix>`.
pub struct UsernameService {
    user_repo: Arc<dyn UserRepository>,
    generator: Arc<dyn SuffixGenerator>,
}

impl UsernameService {
    pub fn new(user_repo: Arc<dyn UserRepository>, generator: Arc<dyn SuffixGenerator>) -> Self {
        Self {
            user_repo,
            generator,
        }
    }

    pub async fn generate_unique(&self, display_name: &str) -> DomainResult<Username> {
        let stem = Username::format_display_name(display_name);

        for attempt in 1..=MAX_ATTEMPTS {
            let suffix = self.generator.random_suffix(USERNAME_SUFFIX_LEN);
            let candidate = Username::new(format!("{stem}_{suffix}"))?;
            if self.user_repo.find_by_username(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            tracing::debug!(attempt, candidate = %candidate, "username taken, regenerating suffix");
        }

        Err(DomainError::Conflict(format!(
            "could not find a free username for '{stem}'"
        )))
    }
}
