//! Credential Verifier
//!
//! Checks a username/password pair against the user store.

use std::sync::Arc;

use crate::domain::entity::user::StoredUser;
use crate::domain::repository::UserStore;
use crate::domain::service::PasswordHasher;
use crate::domain::value_object::credentials::Credentials;
use crate::error::AuthResult;

/// Outcome of a credential check
///
/// Store failures are not outcomes; they come back as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    Verified(StoredUser),
    UserNotFound,
    /// Hash mismatch, or the user has no local password (federated-only)
    WrongPassword,
}

pub struct CredentialVerifier<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> CredentialVerifier<U, H>
where
    U: UserStore + Send + Sync,
    H: PasswordHasher,
{
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }

    pub async fn verify(&self, credentials: &Credentials) -> AuthResult<CredentialCheck> {
        let Some(user) = self.users.find_by_username(&credentials.username).await? else {
            return Ok(CredentialCheck::UserNotFound);
        };

        let matches = match user.password_hash.as_deref() {
            Some(hash) => self.hasher.matches(&credentials.password, hash),
            None => false,
        };

        if matches {
            Ok(CredentialCheck::Verified(user))
        } else {
            Ok(CredentialCheck::WrongPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::role::RoleRef;
    use crate::infra::memory::InMemoryAuthStore;
    use crate::test_support::{FailingStore, PlainHasher};

    fn store_with(user: StoredUser) -> Arc<InMemoryAuthStore> {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_USER"]));
        store.insert(user);
        store
    }

    fn alice(password_hash: Option<&str>) -> StoredUser {
        StoredUser::new(
            "alice",
            password_hash.map(|h| format!("plain:{}", h)),
            "alice@example.com",
            RoleRef::new("ROLE_USER"),
        )
    }

    #[tokio::test]
    async fn test_verified() {
        let store = store_with(alice(Some("wonderland")));
        let verifier = CredentialVerifier::new(store, Arc::new(PlainHasher));

        let check = verifier
            .verify(&Credentials::new("alice", "wonderland".to_string()))
            .await
            .unwrap();
        assert!(matches!(check, CredentialCheck::Verified(u) if u.username == "alice"));
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let store = store_with(alice(Some("wonderland")));
        let verifier = CredentialVerifier::new(store, Arc::new(PlainHasher));

        let check = verifier
            .verify(&Credentials::new("bob", "wonderland".to_string()))
            .await
            .unwrap();
        assert_eq!(check, CredentialCheck::UserNotFound);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let store = store_with(alice(Some("wonderland")));
        let verifier = CredentialVerifier::new(store, Arc::new(PlainHasher));

        let check = verifier
            .verify(&Credentials::new("alice", "looking-glass".to_string()))
            .await
            .unwrap();
        assert_eq!(check, CredentialCheck::WrongPassword);
    }

    #[tokio::test]
    async fn test_federated_only_user_is_wrong_password() {
        let store = store_with(alice(None));
        let verifier = CredentialVerifier::new(store, Arc::new(PlainHasher));

        let check = verifier
            .verify(&Credentials::new("alice", "".to_string()))
            .await
            .unwrap();
        assert_eq!(check, CredentialCheck::WrongPassword);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let verifier = CredentialVerifier::new(Arc::new(FailingStore), Arc::new(PlainHasher));

        let err = verifier
            .verify(&Credentials::new("alice", "wonderland".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "PERSISTENCE_FAILURE");
    }
}
