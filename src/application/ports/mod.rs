// src/application/ports/mod.rs
pub mod identity;
pub mod oauth_state;
pub mod security;
pub mod time;
pub mod util;
