//! Federated Sign In Use Case
//!
//! OAuth2 authorization-code login: code exchange, identity fetch,
//! just-in-time provisioning, then token issuance.

use std::sync::Arc;

use crate::application::identity_provisioner::IdentityProvisioner;
use crate::application::token_codec::TokenCodec;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{Clock, FederationProvider};
use crate::error::AuthResult;

/// Federated sign in input
pub struct FederatedSignInInput {
    pub code: String,
    pub code_verifier: String,
    pub redirect_uri: String,
}

/// Federated sign in use case
pub struct FederatedSignInUseCase<R, F>
where
    R: UserStore + RoleStore,
    F: FederationProvider,
{
    provider: Arc<F>,
    provisioner: IdentityProvisioner<R>,
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl<R, F> FederatedSignInUseCase<R, F>
where
    R: UserStore + RoleStore + Send + Sync,
    F: FederationProvider + Send + Sync,
{
    pub fn new(
        store: Arc<R>,
        provider: Arc<F>,
        default_role: &str,
        codec: Arc<TokenCodec>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            provisioner: IdentityProvisioner::new(store, default_role),
            codec,
            clock,
        }
    }

    pub async fn execute(&self, input: FederatedSignInInput) -> AuthResult<String> {
        let access_token = self
            .provider
            .exchange_code(&input.code, &input.code_verifier, &input.redirect_uri)
            .await?;

        let identity = self.provider.fetch_identity(&access_token).await?;
        let user = self.provisioner.resolve(&identity).await?;

        let token = self
            .codec
            .issue(&user.username, &user.role_names(), self.clock.now())?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User signed in via federation"
        );

        Ok(token)
    }
}
