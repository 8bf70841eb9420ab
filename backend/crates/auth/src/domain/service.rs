//! Collaborator Traits
//!
//! Side-effecting services the core depends on: hashing, time, and the
//! federation provider.

use chrono::{DateTime, Utc};
use platform::password::ClearTextPassword;

use crate::domain::entity::identity::FederatedIdentity;
use crate::error::AuthResult;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &ClearTextPassword) -> AuthResult<String>;

    /// Constant-time check. An unparseable stored hash is a mismatch.
    fn matches(&self, plain: &ClearTextPassword, hash: &str) -> bool;
}

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// OAuth2 authorization-code federation
#[trait_variant::make(FederationProvider: Send)]
pub trait LocalFederationProvider {
    /// Exchange an authorization code (plus PKCE verifier) for an access token
    async fn exchange_code(
        &self,
        code: &str,
        code_verifier: &str,
        redirect_uri: &str,
    ) -> AuthResult<String>;

    /// Fetch the identity behind an access token
    async fn fetch_identity(&self, access_token: &str) -> AuthResult<FederatedIdentity>;
}
