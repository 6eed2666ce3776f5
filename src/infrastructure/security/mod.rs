pub mod claims;
pub mod oauth_state_store;
pub mod token;
