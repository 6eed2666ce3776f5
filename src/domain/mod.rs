pub mod blog;
pub mod errors;
pub mod user;
