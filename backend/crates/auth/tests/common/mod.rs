//! Shared helpers for auth integration tests

#![allow(dead_code)]

pub mod mock_google;

use std::sync::Arc;

use auth::domain::service::PasswordHasher;
use auth::{AuthConfig, AuthResult};
use chrono::{DateTime, TimeZone, Utc};
use platform::password::ClearTextPassword;

#[allow(unused_imports)]
pub use mock_google::{MockBehavior, MockGoogle, start_mock_google};

pub const REDIRECT_URI: &str = "http://localhost:5173/auth/callback";

/// Reversible "hash" so flow tests skip Argon2's cost
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, plain: &ClearTextPassword) -> AuthResult<String> {
        Ok(format!("plain:{}", plain.expose()))
    }

    fn matches(&self, plain: &ClearTextPassword, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(plain.expose())
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Config wired to the mock provider with a fixed signing secret
pub fn test_config(provider_base_url: &str) -> Arc<AuthConfig> {
    Arc::new(
        AuthConfig {
            jwt_secret: b"integration-test-secret-0123456789abcdef".to_vec(),
            google_client_id: "test-client-id".to_string(),
            google_client_secret: "test-client-secret".to_string(),
            ..AuthConfig::default()
        }
        .with_provider_base_url(provider_base_url),
    )
}
