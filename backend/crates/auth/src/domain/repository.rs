//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::StoredUser;
use crate::domain::value_object::role::RoleRef;
use crate::error::AuthResult;

/// User store
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<StoredUser>>;

    /// Insert a new user
    ///
    /// Never updates: an existing username fails with `UserAlreadyExists`.
    /// Backing-store errors surface as `PersistenceFailure`.
    async fn save(&self, user: &StoredUser) -> AuthResult<StoredUser>;
}

/// Role store (read-only)
#[trait_variant::make(RoleStore: Send)]
pub trait LocalRoleStore {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<RoleRef>>;
}
