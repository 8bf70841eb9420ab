//! Mock Google OAuth2 server for integration testing
//!
//! Serves the two endpoints the federation client calls:
//! - Token endpoint (/token), form-encoded authorization-code exchange
//! - Userinfo endpoint (/userinfo), bearer-authenticated identity lookup
//!
//! Behaviour is switchable at runtime through [`MockGoogle::set`].

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

pub const ACCESS_TOKEN: &str = "ya29.mock-access-token";

/// Knobs controlling what the mock answers
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub token_status: StatusCode,
    pub access_token: Option<String>,
    pub token_delay: Option<Duration>,
    pub userinfo_status: StatusCode,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            token_status: StatusCode::OK,
            access_token: Some(ACCESS_TOKEN.to_string()),
            token_delay: None,
            userinfo_status: StatusCode::OK,
            email: Some("carol@gmail.com".to_string()),
            name: Some("Carol".to_string()),
        }
    }
}

#[derive(Clone, Default)]
struct MockState {
    behavior: Arc<Mutex<MockBehavior>>,
    token_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockGoogle {
    pub base_url: String,
    state: MockState,
    _handle: JoinHandle<()>,
}

impl MockGoogle {
    pub fn set(&self, behavior: MockBehavior) {
        *self.state.behavior.lock().unwrap() = behavior;
    }

    /// Form bodies received by the token endpoint, oldest first
    pub fn token_requests(&self) -> Vec<HashMap<String, String>> {
        self.state.token_requests.lock().unwrap().clone()
    }
}

async fn token_handler(
    State(state): State<MockState>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.token_requests.lock().unwrap().push(form);
    let behavior = state.behavior.lock().unwrap().clone();

    if let Some(delay) = behavior.token_delay {
        tokio::time::sleep(delay).await;
    }

    if !behavior.token_status.is_success() {
        return (behavior.token_status, Json(json!({ "error": "invalid_grant" })));
    }

    let body = match behavior.access_token {
        Some(token) => json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid email profile",
        }),
        None => json!({ "token_type": "Bearer" }),
    };
    (StatusCode::OK, Json(body))
}

async fn userinfo_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let behavior = state.behavior.lock().unwrap().clone();

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ACCESS_TOKEN))
        .unwrap_or(false);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_token" })),
        );
    }

    if !behavior.userinfo_status.is_success() {
        return (behavior.userinfo_status, Json(json!({ "error": "backend" })));
    }

    let mut body = json!({ "sub": "108234567890123456789", "email_verified": true });
    if let Some(email) = behavior.email {
        body["email"] = json!(email);
    }
    if let Some(name) = behavior.name {
        body["name"] = json!(name);
    }
    (StatusCode::OK, Json(body))
}

/// Start a mock Google server on a random port
pub async fn start_mock_google() -> MockGoogle {
    let state = MockState::default();

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let app = Router::new()
        .route("/token", post(token_handler))
        .route("/userinfo", get(userinfo_handler))
        .with_state(state.clone());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockGoogle {
        base_url,
        state,
        _handle: handle,
    }
}

/// Base URL on which nothing is listening
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}
