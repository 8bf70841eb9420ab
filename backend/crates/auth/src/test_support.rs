//! Test doubles shared by unit tests

use chrono::{DateTime, TimeZone, Utc};
use platform::password::ClearTextPassword;

use crate::domain::entity::identity::FederatedIdentity;
use crate::domain::entity::user::StoredUser;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{FederationProvider, PasswordHasher};
use crate::domain::value_object::role::RoleRef;
use crate::error::{AuthError, AuthResult};

/// Reversible "hash" so tests skip Argon2's cost
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, plain: &ClearTextPassword) -> AuthResult<String> {
        Ok(format!("plain:{}", plain.expose()))
    }

    fn matches(&self, plain: &ClearTextPassword, hash: &str) -> bool {
        hash.strip_prefix("plain:") == Some(plain.expose())
    }
}

/// Store whose every call fails
pub struct FailingStore;

impl UserStore for FailingStore {
    async fn find_by_username(&self, _username: &str) -> AuthResult<Option<StoredUser>> {
        Err(AuthError::PersistenceFailure("connection reset".into()))
    }

    async fn save(&self, _user: &StoredUser) -> AuthResult<StoredUser> {
        Err(AuthError::PersistenceFailure("connection reset".into()))
    }
}

impl RoleStore for FailingStore {
    async fn find_by_name(&self, _name: &str) -> AuthResult<Option<RoleRef>> {
        Err(AuthError::PersistenceFailure("connection reset".into()))
    }
}

/// Provider returning canned answers
pub struct StubProvider {
    pub token: AuthResult<String>,
    pub identity: FederatedIdentity,
}

impl StubProvider {
    pub fn returning(email: &str, name: &str) -> Self {
        Self {
            token: Ok("ya29.stub-access-token".to_string()),
            identity: FederatedIdentity {
                email: email.to_string(),
                display_name: name.to_string(),
            },
        }
    }

    pub fn unavailable() -> Self {
        Self {
            token: Err(AuthError::FederationUnavailable("connect timeout".into())),
            identity: FederatedIdentity {
                email: String::new(),
                display_name: String::new(),
            },
        }
    }
}

impl FederationProvider for StubProvider {
    async fn exchange_code(
        &self,
        _code: &str,
        _code_verifier: &str,
        _redirect_uri: &str,
    ) -> AuthResult<String> {
        match &self.token {
            Ok(token) => Ok(token.clone()),
            Err(AuthError::FederationUnavailable(msg)) => {
                Err(AuthError::FederationUnavailable(msg.clone()))
            }
            Err(_) => Err(AuthError::FederationTokenMissing),
        }
    }

    async fn fetch_identity(&self, _access_token: &str) -> AuthResult<FederatedIdentity> {
        Ok(self.identity.clone())
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}
