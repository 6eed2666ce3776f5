// src/presentation/http/validation.rs
//! Payload checks applied before a request reaches the application layer.

use super::error::{HttpError, HttpResult};
use crate::domain::user::Username;

pub const TITLE_MAX_CHARS: usize = 200;
pub const SUMMARY_MAX_CHARS: usize = 500;
pub const URL_MAX_CHARS: usize = 2048;

pub fn title(value: &str) -> HttpResult<()> {
    if value.trim().is_empty() {
        return Err(HttpError::bad_request("title must not be empty"));
    }
    if value.chars().count() > TITLE_MAX_CHARS {
        return Err(HttpError::bad_request(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn summary(value: &str) -> HttpResult<()> {
    if value.chars().count() > SUMMARY_MAX_CHARS {
        return Err(HttpError::bad_request(format!(
            "summary must be at most {SUMMARY_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn content(value: &str) -> HttpResult<()> {
    if value.trim().is_empty() {
        return Err(HttpError::bad_request("content must not be empty"));
    }
    Ok(())
}

/// `field` names the offending key in the error message.
pub fn url(field: &str, value: &str) -> HttpResult<()> {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(HttpError::bad_request(format!(
            "{field} must be an http(s) URL"
        )));
    }
    if value.chars().count() > URL_MAX_CHARS {
        return Err(HttpError::bad_request(format!(
            "{field} must be at most {URL_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn optional_url(field: &str, value: Option<&str>) -> HttpResult<()> {
    value.map_or(Ok(()), |v| url(field, v))
}

pub fn username(value: &str) -> HttpResult<()> {
    Username::new(value)
        .map(|_| ())
        .map_err(|err| HttpError::bad_request(err.to_string()))
}
