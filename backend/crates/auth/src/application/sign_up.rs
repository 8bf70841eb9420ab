//! Sign Up Use Case
//!
//! Registers a new local user with the default role.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{PublicUserView, StoredUser};
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::PasswordHasher;
use crate::domain::value_object::credentials::Registration;
use crate::error::{AuthError, AuthResult};

/// Sign up use case
pub struct SignUpUseCase<R, H>
where
    R: UserStore + RoleStore,
    H: PasswordHasher,
{
    store: Arc<R>,
    hasher: Arc<H>,
    config: Arc<AuthConfig>,
}

impl<R, H> SignUpUseCase<R, H>
where
    R: UserStore + RoleStore + Send + Sync,
    H: PasswordHasher,
{
    pub fn new(store: Arc<R>, hasher: Arc<H>, config: Arc<AuthConfig>) -> Self {
        Self {
            store,
            hasher,
            config,
        }
    }

    pub async fn execute(&self, registration: Registration) -> AuthResult<PublicUserView> {
        // Fast path; the store's uniqueness check below is the real guard
        if self
            .store
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists(registration.username));
        }

        let password_hash = self.hasher.hash(&registration.password)?;

        let role = self
            .store
            .find_by_name(&self.config.default_role)
            .await?
            .ok_or_else(|| AuthError::RoleMissing(self.config.default_role.clone()))?;

        let user = StoredUser::new(
            registration.username.as_str(),
            Some(password_hash),
            registration.email.as_str(),
            role,
        );

        let saved = self.store.save(&user).await?;

        tracing::info!(
            user_id = %saved.id,
            username = %saved.username,
            "User signed up"
        );

        Ok(saved.to_public_view())
    }
}
