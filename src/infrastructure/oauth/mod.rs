// src/infrastructure/oauth/mod.rs
pub mod google;

pub use google::{GoogleIdentityProvider, GoogleOAuthSettings};
