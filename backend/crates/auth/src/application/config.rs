//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared via `Arc`.

use std::fmt;
use std::time::Duration;

use crate::domain::value_object::role::DEFAULT_ROLE;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: Vec<u8>,
    /// Session token lifetime (1 hour)
    pub token_ttl: Duration,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,
    /// Per-request timeout for provider calls
    pub federation_timeout: Duration,
    /// Role granted to new accounts
    pub default_role: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: Duration::from_secs(3600), // 1 hour
            google_client_id: String::new(),
            google_client_secret: String::new(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            federation_timeout: Duration::from_secs(10),
            default_role: DEFAULT_ROLE.to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        Self {
            jwt_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self {
            google_client_id: "dev-client-id".to_string(),
            google_client_secret: "dev-client-secret".to_string(),
            ..Self::with_random_secret()
        }
    }

    /// Point all provider endpoints at `base_url` (mock providers)
    pub fn with_provider_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.google_token_url = format!("{}/token", base);
        self.google_userinfo_url = format!("{}/userinfo", base);
        self
    }

    /// Get token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("google_client_id", &self.google_client_id)
            .field("google_client_secret", &"[REDACTED]")
            .field("google_token_url", &self.google_token_url)
            .field("google_userinfo_url", &self.google_userinfo_url)
            .field("federation_timeout", &self.federation_timeout)
            .field("default_role", &self.default_role)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
