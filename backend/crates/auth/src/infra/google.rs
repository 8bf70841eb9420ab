//! Google OAuth2 federation client
//!
//! Authorization-code exchange (with the caller's PKCE verifier) and userinfo
//! lookup over reqwest.
//! Single attempt per call, bounded by the configured timeout.

use reqwest::Client;
use serde::Deserialize;

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::FederatedIdentity;
use crate::domain::service::FederationProvider;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Clone)]
pub struct GoogleFederationClient {
    http: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    userinfo_url: String,
}

impl GoogleFederationClient {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let http = Client::builder()
            .timeout(config.federation_timeout)
            .build()
            .map_err(|e| AuthError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            token_url: config.google_token_url.clone(),
            userinfo_url: config.google_userinfo_url.clone(),
        })
    }
}

fn unavailable(endpoint: &str, err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::FederationUnavailable(format!("{} timed out", endpoint))
    } else {
        AuthError::FederationUnavailable(format!("{} request failed: {}", endpoint, err))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl FederationProvider for GoogleFederationClient {
    async fn exchange_code(
        &self,
        code: &str,
        code_verifier: &str,
        redirect_uri: &str,
    ) -> AuthResult<String> {
        tracing::debug!(endpoint = %self.token_url, "Exchanging authorization code");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code_verifier", code_verifier),
            ])
            .send()
            .await
            .map_err(|e| unavailable("token endpoint", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::FederationUnavailable(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| unavailable("token endpoint", e))?;

        non_empty(body.access_token).ok_or(AuthError::FederationTokenMissing)
    }

    async fn fetch_identity(&self, access_token: &str) -> AuthResult<FederatedIdentity> {
        tracing::debug!(endpoint = %self.userinfo_url, "Fetching federated identity");

        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| unavailable("userinfo endpoint", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::FederationUnavailable(format!(
                "userinfo endpoint returned {}",
                status
            )));
        }

        let body: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| unavailable("userinfo endpoint", e))?;

        let email = non_empty(body.email).ok_or(AuthError::FederationIdentityIncomplete("email"))?;
        let display_name =
            non_empty(body.name).ok_or(AuthError::FederationIdentityIncomplete("name"))?;

        Ok(FederatedIdentity {
            email,
            display_name,
        })
    }
}
