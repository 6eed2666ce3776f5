// tests/support/builders.rs
use axum::body::Body;
use axum::http::{Request, header};
use serde_json::Value;

use resdev_core::domain::blog::{Blog, BlogId};
use resdev_core::domain::user::UserId;

use super::mocks::fixed_now;

pub struct BlogBuilder {
    id: i64,
    title: String,
    summary: String,
    content: String,
    cover_url: Option<String>,
    published: bool,
    author_id: i64,
    age_secs: i64,
}

impl BlogBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Blog {id}"),
            summary: String::new(),
            content: format!("content of blog {id}"),
            cover_url: None,
            published: false,
            author_id: 1,
            age_secs: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Created this many seconds before the fixed test instant.
    pub fn aged(mut self, secs: i64) -> Self {
        self.age_secs = secs;
        self
    }

    pub fn build(self) -> Blog {
        let created_at = fixed_now() - chrono::Duration::seconds(self.age_secs);
        Blog {
            id: BlogId::new(self.id).unwrap(),
            title: self.title,
            summary: self.summary,
            content: self.content,
            cover_url: self.cover_url,
            published: self.published,
            author_id: UserId::new(self.author_id).unwrap(),
            created_at,
            updated_at: created_at,
        }
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request("GET", uri, token, None)
}

pub fn post(uri: &str, token: Option<&str>) -> Request<Body> {
    request("POST", uri, token, None)
}

pub fn json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request(method, uri, token, Some(body))
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
