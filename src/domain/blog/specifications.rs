use crate::domain::blog::entity::Blog;
use crate::domain::user::UserId;

pub struct IsBlogOwnerSpec<'a> {
    blog: &'a Blog,
    caller: UserId,
}

impl<'a> IsBlogOwnerSpec<'a> {
    pub fn new(blog: &'a Blog, caller: UserId) -> Self {
        Self { blog, caller }
    }

    pub fn is_satisfied(&self) -> bool {
        self.blog.author_id == self.caller
    }
}

pub fn is_owner(blog: &Blog, caller: UserId) -> bool {
    IsBlogOwnerSpec::new(blog, caller).is_satisfied()
}

/// Outcome of an owner-gated lookup. Absence and a foreign author collapse
/// into the same `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogAccess {
    Granted(Blog),
    NotFound,
}

impl BlogAccess {
    pub fn resolve(found: Option<Blog>, caller: UserId) -> Self {
        match found.filter(|blog| is_owner(blog, caller)) {
            Some(blog) => Self::Granted(blog),
            None => Self::NotFound,
        }
    }
}
