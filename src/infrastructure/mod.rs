pub mod database;
pub mod oauth;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
