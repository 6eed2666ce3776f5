mod get_owned;
mod get_published;
mod list;
mod service;

pub use get_owned::GetOwnedBlogQuery;
pub use get_published::GetPublishedBlogQuery;
pub use service::BlogQueryService;
