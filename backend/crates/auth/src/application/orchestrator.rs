//! Auth Orchestrator
//!
//! Single entry point composing the use cases: local login, registration,
//! federated login and token verification.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::federated_sign_in::{FederatedSignInInput, FederatedSignInUseCase};
use crate::application::sign_in::SignInUseCase;
use crate::application::sign_up::SignUpUseCase;
use crate::application::token_codec::{TokenCodec, VerifiedPrincipal};
use crate::domain::entity::user::PublicUserView;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{Clock, FederationProvider, PasswordHasher};
use crate::domain::value_object::credentials::{Credentials, Registration};
use crate::error::{AuthError, AuthResult};

pub struct AuthOrchestrator<R, H, F> {
    store: Arc<R>,
    hasher: Arc<H>,
    provider: Arc<F>,
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
    config: Arc<AuthConfig>,
}

impl<R, H, F> Clone for AuthOrchestrator<R, H, F> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            hasher: self.hasher.clone(),
            provider: self.provider.clone(),
            codec: self.codec.clone(),
            clock: self.clock.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, H, F> AuthOrchestrator<R, H, F>
where
    R: UserStore + RoleStore + Send + Sync,
    H: PasswordHasher,
    F: FederationProvider + Send + Sync,
{
    pub fn new(
        store: Arc<R>,
        hasher: Arc<H>,
        provider: Arc<F>,
        clock: Arc<dyn Clock>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            store,
            hasher,
            provider,
            codec: Arc::new(TokenCodec::new(&config)),
            clock,
            config,
        }
    }

    /// Local login
    pub async fn authenticate(&self, credentials: Credentials) -> AuthResult<String> {
        SignInUseCase::new(
            self.store.clone(),
            self.hasher.clone(),
            self.codec.clone(),
            self.clock.clone(),
        )
        .execute(credentials)
        .await
    }

    pub async fn register(&self, registration: Registration) -> AuthResult<PublicUserView> {
        SignUpUseCase::new(self.store.clone(), self.hasher.clone(), self.config.clone())
            .execute(registration)
            .await
    }

    pub async fn federated_login(
        &self,
        code: &str,
        code_verifier: &str,
        redirect_uri: &str,
    ) -> AuthResult<String> {
        FederatedSignInUseCase::new(
            self.store.clone(),
            self.provider.clone(),
            &self.config.default_role,
            self.codec.clone(),
            self.clock.clone(),
        )
        .execute(FederatedSignInInput {
            code: code.to_string(),
            code_verifier: code_verifier.to_string(),
            redirect_uri: redirect_uri.to_string(),
        })
        .await
    }

    /// Verify a bearer token against the current clock
    pub fn verify_token(&self, token: &str) -> AuthResult<VerifiedPrincipal> {
        verify_with(&self.codec, self.clock.as_ref(), token)
    }

    pub fn codec(&self) -> Arc<TokenCodec> {
        self.codec.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }
}

/// Shared by the orchestrator and the bearer middleware
pub(crate) fn verify_with(
    codec: &TokenCodec,
    clock: &dyn Clock,
    token: &str,
) -> AuthResult<VerifiedPrincipal> {
    codec.verify(token, clock.now()).map_err(|e| {
        let err = AuthError::from(e);
        tracing::warn!(code = err.code(), "Token verification failed");
        err
    })
}
