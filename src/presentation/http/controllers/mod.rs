// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod blogs;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
/// Use together with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
