// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod blog_repos;
pub mod identity;
pub mod oauth_state;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use blog_repos::{InMemoryBlogStore, LeakyBlogReader};
pub use identity::{GOOD_CODE, StubIdentityProvider, google_profile};
pub use oauth_state::InMemoryOAuthStateStore;
pub use security::{ALICE_TOKEN, BOB_TOKEN, StubTokenManager, actor};
pub use time::{TickingClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
pub use util::{FixedSuffix, ScriptedSuffix};
