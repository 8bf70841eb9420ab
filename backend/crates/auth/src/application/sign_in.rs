//! Sign In Use Case
//!
//! Verifies local credentials and issues a session token.

use std::sync::Arc;

use crate::application::credential_verifier::{CredentialCheck, CredentialVerifier};
use crate::application::token_codec::TokenCodec;
use crate::domain::repository::UserStore;
use crate::domain::service::{Clock, PasswordHasher};
use crate::domain::value_object::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Sign in use case
pub struct SignInUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    verifier: CredentialVerifier<U, H>,
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl<U, H> SignInUseCase<U, H>
where
    U: UserStore + Send + Sync,
    H: PasswordHasher,
{
    pub fn new(
        users: Arc<U>,
        hasher: Arc<H>,
        codec: Arc<TokenCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verifier: CredentialVerifier::new(users, hasher),
            codec,
            clock,
        }
    }

    pub async fn execute(&self, credentials: Credentials) -> AuthResult<String> {
        match self.verifier.verify(&credentials).await? {
            CredentialCheck::Verified(user) => {
                let token = self
                    .codec
                    .issue(&user.username, &user.role_names(), self.clock.now())?;

                tracing::info!(
                    user_id = %user.id,
                    username = %user.username,
                    "User signed in"
                );

                Ok(token)
            }
            CredentialCheck::UserNotFound => {
                tracing::warn!(username = %credentials.username, "Sign in for unknown user");
                Err(AuthError::LoginNotFound)
            }
            CredentialCheck::WrongPassword => {
                tracing::warn!(username = %credentials.username, "Sign in with wrong password");
                Err(AuthError::InvalidPassword)
            }
        }
    }
}
