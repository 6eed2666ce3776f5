pub mod auth;
pub mod blogs;
pub mod list;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, SignInDto, TokenSubject};
pub use blogs::{BlogDto, PublishedBlogDto, SafeBlogDto};
pub use list::ListDto;
pub use users::{SafeUserDto, UserDto};
