use std::sync::Arc;

use crate::domain::{blog::BlogReadRepository, user::UserRepository};

pub struct BlogQueryService {
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn BlogReadRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            read_repo,
            user_repo,
        }
    }
}
