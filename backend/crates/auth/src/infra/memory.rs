//! In-memory auth store
//!
//! Used by tests and local runs without a database.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entity::user::StoredUser;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::value_object::role::RoleRef;
use crate::error::{AuthError, AuthResult};

/// Users keyed by username, plus a fixed role table
#[derive(Debug, Default)]
pub struct InMemoryAuthStore {
    users: Mutex<HashMap<String, StoredUser>>,
    roles: HashMap<String, RoleRef>,
}

impl InMemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                (name.clone(), RoleRef::new(name))
            })
            .collect();

        Self {
            users: Mutex::new(HashMap::new()),
            roles,
        }
    }

    /// Seed a user, replacing any with the same username
    pub fn insert(&self, user: StoredUser) {
        self.lock_users().insert(user.username.clone(), user);
    }

    pub fn get(&self, username: &str) -> Option<StoredUser> {
        self.lock_users().get(username).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.lock_users().len()
    }

    fn lock_users(&self) -> MutexGuard<'_, HashMap<String, StoredUser>> {
        self.users.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl UserStore for InMemoryAuthStore {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<StoredUser>> {
        Ok(self.get(username))
    }

    async fn save(&self, user: &StoredUser) -> AuthResult<StoredUser> {
        // Check and insert under one lock
        let mut users = self.lock_users();
        if users.contains_key(&user.username) {
            return Err(AuthError::UserAlreadyExists(user.username.clone()));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user.clone())
    }
}

impl RoleStore for InMemoryAuthStore {
    async fn find_by_name(&self, name: &str) -> AuthResult<Option<RoleRef>> {
        Ok(self.roles.get(name).cloned())
    }
}
