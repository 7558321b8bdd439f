//! Shared test environment: the production router wired to mock
//! collaborators
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use hookday::{AppState, Config, InMemoryRoomRegistry, RoomRegistry};

use super::mocks::{RecordingNotifier, SequencedTokenExchanger};

pub struct TestSetup {
    pub app: Router,
    pub registry: Arc<InMemoryRoomRegistry>,
    pub notifier: Arc<RecordingNotifier>,
    pub exchanger: Arc<SequencedTokenExchanger>,
    pub base_url: String,
}

impl TestSetup {
    /// Builds the production router with a recording notifier and a
    /// sequenced exchanger issuing the given tokens
    pub fn new(name: &str, tokens: &[&str]) -> Self {
        Self::with_notifier(name, tokens, Arc::new(RecordingNotifier::new()))
    }

    /// Same as `new` but every delivery attempt fails
    pub fn with_failing_notifier(name: &str, tokens: &[&str]) -> Self {
        Self::with_notifier(name, tokens, Arc::new(RecordingNotifier::failing()))
    }

    fn with_notifier(name: &str, tokens: &[&str], notifier: Arc<RecordingNotifier>) -> Self {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let exchanger = Arc::new(SequencedTokenExchanger::new(tokens, Arc::clone(&notifier)));
        let base_url = "https://hookday.example.com".to_string();

        let config = Config {
            port: 8080,
            static_dir: Self::static_dir(name),
            base_url: base_url.clone(),
        };

        let state = AppState::new(
            Arc::clone(&registry) as Arc<dyn RoomRegistry + Send + Sync>,
            Arc::clone(&exchanger) as Arc<dyn hookday::TokenExchanger + Send + Sync>,
            Arc::new(config),
        );

        Self {
            app: hookday::router(state),
            registry,
            notifier,
            exchanger,
            base_url,
        }
    }

    /// Writes a descriptor template into a per-test static directory
    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hookday-test-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("atlassian-connect.json"),
            r#"{"links": {"self": "{{localBaseUrl}}/atlassian-connect.json"}}"#,
        )
        .unwrap();
        dir
    }

    pub async fn post(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Installs a room and returns the response status
    pub async fn install(&self, oauth_id: &str, oauth_secret: &str, room_id: u64) -> StatusCode {
        let body = format!(
            r#"{{"oauthId": "{}", "oauthSecret": "{}", "roomId": {}}}"#,
            oauth_id, oauth_secret, room_id
        );
        self.post("/installable", &body).await.status()
    }

    /// Fires a hook event for a room and returns the response status
    pub async fn fire_hook(&self, room_id: u64) -> StatusCode {
        let body = format!(r#"{{"item": {{"room": {{"id": {}}}}}}}"#, room_id);
        self.post("/hook", &body).await.status()
    }

    /// Registered access token for a room, if any
    pub async fn token_for(&self, room_id: &str) -> Option<String> {
        self.registry
            .get(room_id)
            .await
            .unwrap()
            .map(|credential| credential.access_token)
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
