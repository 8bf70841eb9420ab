//! Identity Provisioner
//!
//! Maps a federated identity onto a local user, creating one on first login.

use std::sync::Arc;

use crate::domain::entity::identity::FederatedIdentity;
use crate::domain::entity::user::StoredUser;
use crate::domain::repository::{RoleStore, UserStore};
use crate::error::{AuthError, AuthResult};

pub struct IdentityProvisioner<R>
where
    R: UserStore + RoleStore,
{
    store: Arc<R>,
    default_role: String,
}

impl<R> IdentityProvisioner<R>
where
    R: UserStore + RoleStore + Send + Sync,
{
    pub fn new(store: Arc<R>, default_role: impl Into<String>) -> Self {
        Self {
            store,
            default_role: default_role.into(),
        }
    }

    /// Local user whose username equals the display name, created if absent
    ///
    /// An existing user is returned untouched: the federated email never
    /// overwrites the stored one.
    pub async fn resolve(&self, identity: &FederatedIdentity) -> AuthResult<StoredUser> {
        if let Some(user) = self.store.find_by_username(&identity.display_name).await? {
            return Ok(user);
        }

        let role = self
            .store
            .find_by_name(&self.default_role)
            .await?
            .ok_or_else(|| AuthError::RoleMissing(self.default_role.clone()))?;

        let user = StoredUser::new(&identity.display_name, None, &identity.email, role);

        match self.store.save(&user).await {
            Ok(saved) => {
                tracing::info!(
                    user_id = %saved.id,
                    username = %saved.username,
                    "Provisioned federated user"
                );
                Ok(saved)
            }
            // Lost a concurrent first-login race; converge on the winner
            Err(AuthError::UserAlreadyExists(_)) => self
                .store
                .find_by_username(&identity.display_name)
                .await?
                .ok_or_else(|| {
                    AuthError::Unexpected(format!(
                        "user '{}' vanished after uniqueness conflict",
                        identity.display_name
                    ))
                }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::role::RoleRef;
    use crate::infra::memory::InMemoryAuthStore;

    fn identity(name: &str) -> FederatedIdentity {
        FederatedIdentity {
            email: format!("{}@gmail.com", name.to_lowercase()),
            display_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_creates_user_with_default_role() {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_USER", "ROLE_ADMIN"]));
        let provisioner = IdentityProvisioner::new(store.clone(), "ROLE_USER");

        let user = provisioner.resolve(&identity("Carol")).await.unwrap();
        assert_eq!(user.username, "Carol");
        assert_eq!(user.email, "carol@gmail.com");
        assert_eq!(user.role_names(), vec!["ROLE_USER".to_string()]);
        assert!(user.password_hash.is_none());
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_existing_user_is_returned_unchanged() {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_USER", "ROLE_ADMIN"]));
        let mut existing = StoredUser::new(
            "Carol",
            Some("plain:pw".to_string()),
            "carol@corp.example",
            RoleRef::new("ROLE_ADMIN"),
        );
        existing.roles.push(RoleRef::new("ROLE_USER"));
        store.insert(existing.clone());

        let provisioner = IdentityProvisioner::new(store.clone(), "ROLE_USER");
        let user = provisioner.resolve(&identity("Carol")).await.unwrap();

        assert_eq!(user, existing);
        assert_eq!(user.email, "carol@corp.example");
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_default_role_creates_nothing() {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_ADMIN"]));
        let provisioner = IdentityProvisioner::new(store.clone(), "ROLE_USER");

        let err = provisioner.resolve(&identity("Dave")).await.unwrap_err();
        assert!(matches!(err, AuthError::RoleMissing(ref r) if r == "ROLE_USER"));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_logins_converge() {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_USER"]));
        let provisioner = IdentityProvisioner::new(store.clone(), "ROLE_USER");

        let first = provisioner.resolve(&identity("Erin")).await.unwrap();
        let second = provisioner.resolve(&identity("Erin")).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_logins_converge() {
        let store = Arc::new(InMemoryAuthStore::with_roles(["ROLE_USER"]));
        let provisioner = Arc::new(IdentityProvisioner::new(store.clone(), "ROLE_USER"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provisioner = provisioner.clone();
                tokio::spawn(async move { provisioner.resolve(&identity("Frank")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);
        assert_eq!(store.user_count(), 1);
    }
}
