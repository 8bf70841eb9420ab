//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store and service traits
//! - `application/` - Use cases, token codec, orchestrator
//! - `infra/` - Postgres / in-memory stores, Argon2, clocks, Google client
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Local login with username + password, returning a signed session token
//! - Registration with the default role
//! - Google OAuth2 login (authorization code + PKCE) with just-in-time
//!   provisioning of a local user
//! - Stateless bearer-token verification for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional server-side pepper
//! - HS256 session tokens with strict expiry against an injectable clock
//! - Login failures distinguish unknown user from wrong password by code

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::orchestrator::AuthOrchestrator;
pub use application::token_codec::{TokenCodec, VerifiedPrincipal};
pub use error::{AuthError, AuthResult};
pub use infra::{
    Argon2Hasher, FixedClock, GoogleFederationClient, InMemoryAuthStore, PgAuthRepository,
    SystemClock,
};
pub use presentation::middleware::{BearerState, require_bearer};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
