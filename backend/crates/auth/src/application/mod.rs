//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credential_verifier;
pub mod federated_sign_in;
pub mod identity_provisioner;
pub mod orchestrator;
pub mod sign_in;
pub mod sign_up;
pub mod token_codec;

// Re-exports
pub use config::AuthConfig;
pub use credential_verifier::{CredentialCheck, CredentialVerifier};
pub use federated_sign_in::{FederatedSignInInput, FederatedSignInUseCase};
pub use identity_provisioner::IdentityProvisioner;
pub use orchestrator::AuthOrchestrator;
pub use sign_in::SignInUseCase;
pub use sign_up::SignUpUseCase;
pub use token_codec::{Claims, TokenCodec, TokenError, VerifiedPrincipal};
