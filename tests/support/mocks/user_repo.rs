// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use resdev_core::domain::errors::{DomainError, DomainResult};
use resdev_core::domain::user::{
    AuthProvider, Email, NewUser, User, UserId, UserRepository, UserUpdate, Username,
};

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    fail_lookups: AtomicBool,
    preempt: Mutex<Option<User>>,
}

impl InMemoryUserRepo {
    /// Stores a Google account with the given id and username.
    pub fn seed(&self, id: i64, username: &str) -> User {
        let user = Self::account(id, username, &format!("seed-{id}"));
        self.users.lock().unwrap().push(user.clone());
        user
    }

    /// Stores this account just before the next insert runs, as a concurrent
    /// request finishing first would.
    pub fn preempt_next_insert(&self, id: i64, username: &str, provider_id: &str) {
        *self.preempt.lock().unwrap() = Some(Self::account(id, username, provider_id));
    }

    fn account(id: i64, username: &str, provider_id: &str) -> User {
        User {
            id: UserId::new(id).unwrap(),
            username: Username::new(username).unwrap(),
            email: Email::new(format!("{username}@example.com")).unwrap(),
            provider: AuthProvider::Google,
            provider_id: provider_id.to_string(),
            picture_url: None,
            created_at: super::time::fixed_now(),
        }
    }

    /// Makes `find_by_id` fail as if storage were unreachable.
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn find(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| pred(u)).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(winner) = self.preempt.lock().unwrap().take() {
            users.push(winner);
        }
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if users
            .iter()
            .any(|u| u.provider == new_user.provider && u.provider_id == new_user.provider_id)
        {
            return Err(DomainError::Conflict(
                "provider identity already registered".into(),
            ));
        }

        let next_id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(next_id)?,
            username: new_user.username,
            email: new_user.email,
            provider: new_user.provider,
            provider_id: new_user.provider_id,
            picture_url: new_user.picture_url,
            created_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        Ok(self.find(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self.find(|u| &u.username == username))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.find(|u| &u.email == email))
    }

    async fn find_by_provider(
        &self,
        provider: AuthProvider,
        provider_id: &str,
    ) -> DomainResult<Option<User>> {
        Ok(self.find(|u| u.provider == provider && u.provider_id == provider_id))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if let Some(username) = &update.username {
            if users.iter().any(|u| &u.username == username && u.id != update.id) {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(picture_url) = update.picture_url {
            user.picture_url = picture_url;
        }
        Ok(user.clone())
    }

    async fn list_usernames(&self) -> DomainResult<Vec<Username>> {
        let mut names: Vec<Username> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.username.clone())
            .collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(names)
    }
}
