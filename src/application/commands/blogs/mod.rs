// src/application/commands/blogs/mod.rs
mod create;
mod edit;
mod guard;
mod publish;
mod service;

pub use create::CreateBlogCommand;
pub use edit::EditBlogCommand;
pub use publish::SetPublishStateCommand;
pub use service::BlogCommandService;
