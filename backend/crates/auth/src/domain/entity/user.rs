//! User Entity
//!
//! Local user record as held by the user store.

use kernel::id::UserId;

use crate::domain::value_object::role::RoleRef;

/// Stored user
///
/// `username` is the natural key and unique across the store.
/// Federated-only users carry no password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// Internal UUID identifier
    pub id: UserId,
    pub username: String,
    /// Argon2id PHC string
    pub password_hash: Option<String>,
    pub email: String,
    /// Ordered, without duplicates
    pub roles: Vec<RoleRef>,
}

impl StoredUser {
    /// Create a new user with a single role
    pub fn new(
        username: impl Into<String>,
        password_hash: Option<String>,
        email: impl Into<String>,
        role: RoleRef,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password_hash,
            email: email.into(),
            roles: vec![role],
        }
    }

    /// Role names in stored order
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.name().to_string()).collect()
    }

    /// Public projection without the hash
    pub fn to_public_view(&self) -> PublicUserView {
        PublicUserView {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// What registration hands back to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUserView {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_single_role() {
        let user = StoredUser::new("alice", None, "alice@example.com", RoleRef::new("ROLE_USER"));
        assert_eq!(user.role_names(), vec!["ROLE_USER".to_string()]);
        assert!(user.password_hash.is_none());
    }

    #[test]
    fn test_public_view_omits_hash() {
        let user = StoredUser::new(
            "bob",
            Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
            "bob@example.com",
            RoleRef::new("ROLE_USER"),
        );
        let view = user.to_public_view();
        assert_eq!(view.username, "bob");
        assert_eq!(view.email, "bob@example.com");
    }
}
