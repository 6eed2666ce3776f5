mod provider_flow;
mod register;
mod service;
mod sign_in;
mod update;

pub use provider_flow::{AUTHORIZATION_TTL_MINUTES, SignInRedirect};
pub use service::UserCommandService;
pub use update::UpdateProfileCommand;
