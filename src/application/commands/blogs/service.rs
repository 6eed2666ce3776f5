// src/application/commands/blogs/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::blog::{BlogReadRepository, BlogWriteRepository},
};

pub struct BlogCommandService {
    pub(super) write_repo: Arc<dyn BlogWriteRepository>,
    pub(super) read_repo: Arc<dyn BlogReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogWriteRepository>,
        read_repo: Arc<dyn BlogReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }
}
