//! API DTOs (Data Transfer Objects)
//!
//! Request types carrying passwords deliberately do not derive `Debug`.

use serde::{Deserialize, Serialize};

use crate::application::token_codec::VerifiedPrincipal;
use crate::domain::entity::user::PublicUserView;

// ============================================================================
// Login
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session token response (login and code exchange)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Register
// ============================================================================

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
}

impl From<PublicUserView> for UserResponse {
    fn from(view: PublicUserView) -> Self {
        Self {
            username: view.username,
            email: view.email,
        }
    }
}

// ============================================================================
// Federated login
// ============================================================================

/// Authorization code from the provider redirect plus the PKCE verifier
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeCodeRequest {
    pub code: String,
    pub code_verifier: String,
    pub redirect_uri: String,
}

// ============================================================================
// Current principal
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    pub subject: String,
    pub roles: Vec<String>,
}

impl From<VerifiedPrincipal> for PrincipalResponse {
    fn from(principal: VerifiedPrincipal) -> Self {
        Self {
            subject: principal.subject,
            roles: principal.roles,
        }
    }
}
