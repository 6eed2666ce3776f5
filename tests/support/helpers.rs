// tests/support/helpers.rs
use axum::body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use resdev_core::application::{
    ports::{
        identity::IdentityProvider, oauth_state::OAuthStateStore, security::TokenManager,
        time::Clock, util::SuffixGenerator,
    },
    services::ApplicationServices,
};
use resdev_core::domain::blog::{BlogReadRepository, BlogWriteRepository};
use resdev_core::domain::user::UserRepository;
use resdev_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{
    InMemoryBlogStore, InMemoryOAuthStateStore, InMemoryUserRepo, ScriptedSuffix,
    StubIdentityProvider, StubTokenManager, TickingClock,
};

/// Services wired to in-memory storage, with users 1 (`alice`) and 2 (`bob`).
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub blogs: Arc<InMemoryBlogStore>,
    pub users: Arc<InMemoryUserRepo>,
    pub identity: Arc<StubIdentityProvider>,
    pub oauth_states: Arc<InMemoryOAuthStateStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_suffixes(Arc::new(ScriptedSuffix::new(&[])))
    }

    pub fn with_suffixes(suffixes: Arc<dyn SuffixGenerator>) -> Self {
        let blogs = Arc::new(InMemoryBlogStore::default());
        Self::build(Arc::clone(&blogs) as Arc<dyn BlogReadRepository>, blogs, suffixes)
    }

    /// Reads go through `reader` instead of the store itself.
    pub fn with_reader(reader: Arc<dyn BlogReadRepository>, blogs: Arc<InMemoryBlogStore>) -> Self {
        Self::build(reader, blogs, Arc::new(ScriptedSuffix::new(&[])))
    }

    fn build(
        reader: Arc<dyn BlogReadRepository>,
        blogs: Arc<InMemoryBlogStore>,
        suffixes: Arc<dyn SuffixGenerator>,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepo::default());
        users.seed(1, "alice");
        users.seed(2, "bob");
        let identity = Arc::new(StubIdentityProvider::default());
        let oauth_states = Arc::new(InMemoryOAuthStateStore::default());

        let services = Arc::new(ApplicationServices::new(
            Arc::clone(&users) as Arc<dyn UserRepository>,
            Arc::clone(&blogs) as Arc<dyn BlogWriteRepository>,
            reader,
            Arc::new(StubTokenManager) as Arc<dyn TokenManager>,
            Arc::clone(&identity) as Arc<dyn IdentityProvider>,
            Arc::clone(&oauth_states) as Arc<dyn OAuthStateStore>,
            Arc::new(TickingClock::default()) as Arc<dyn Clock>,
            suffixes,
        ));

        Self {
            services,
            blogs,
            users,
            identity,
            oauth_states,
        }
    }

    /// Runs the login step so that a callback for the stub's state can complete.
    pub async fn begin_sign_in(&self) {
        self.services
            .user_commands
            .begin_provider_sign_in()
            .await
            .expect("begin sign-in");
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }

    pub async fn send(&self, request: Request<axum::body::Body>) -> Response {
        self.router().oneshot(request).await.unwrap()
    }

    pub async fn send_json(&self, request: Request<axum::body::Body>) -> (StatusCode, Value) {
        let resp = self.send(request).await;
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Fails unless no object anywhere in `value` has a `content` key.
pub fn assert_no_content(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(!map.contains_key("content"), "leaked content in {value}");
            map.values().for_each(assert_no_content);
        }
        Value::Array(items) => items.iter().for_each(assert_no_content),
        _ => {}
    }
}
