pub mod entity;
pub mod publication;
pub mod repository;
pub mod specifications;
pub mod value_objects;
pub mod visibility;

pub use entity::{Blog, BlogEdit, NewBlog};
pub use publication::{PublicationState, PublicationTransition};
pub use repository::{BlogFilter, BlogReadRepository, BlogWriteRepository};
pub use specifications::{BlogAccess, IsBlogOwnerSpec, is_owner};
pub use value_objects::BlogId;
pub use visibility::{ReadIntent, SafeBlog};
