// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewUser, SafeUser, User, UserUpdate};
pub use repository::UserRepository;
pub use services::UsernameService;
pub use value_objects::{AuthProvider, Email, UserId, Username};
