//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::application::orchestrator::AuthOrchestrator;
use crate::application::token_codec::VerifiedPrincipal;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{FederationProvider, PasswordHasher};
use crate::domain::value_object::credentials::{Credentials, Registration};
use crate::error::AuthResult;
use crate::presentation::dto::{
    ExchangeCodeRequest, LoginRequest, PrincipalResponse, RegisterRequest, TokenResponse,
    UserResponse,
};
use crate::presentation::extract::AppJson;

/// Shared state for auth handlers
pub struct AuthAppState<R, H, F> {
    pub auth: AuthOrchestrator<R, H, F>,
}

impl<R, H, F> Clone for AuthAppState<R, H, F> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, H, F>(
    State(state): State<AuthAppState<R, H, F>>,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserStore + RoleStore + Send + Sync + 'static,
    H: PasswordHasher + 'static,
    F: FederationProvider + Send + Sync + 'static,
{
    let token = state
        .auth
        .authenticate(Credentials::new(req.username, req.password))
        .await?;

    Ok(Json(TokenResponse { token }))
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, H, F>(
    State(state): State<AuthAppState<R, H, F>>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserResponse>)>
where
    R: UserStore + RoleStore + Send + Sync + 'static,
    H: PasswordHasher + 'static,
    F: FederationProvider + Send + Sync + 'static,
{
    let view = state
        .auth
        .register(Registration::new(req.username, req.password, req.email))
        .await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

// ============================================================================
// Federated login
// ============================================================================

/// POST /api/auth/exchange-code
pub async fn exchange_code<R, H, F>(
    State(state): State<AuthAppState<R, H, F>>,
    AppJson(req): AppJson<ExchangeCodeRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserStore + RoleStore + Send + Sync + 'static,
    H: PasswordHasher + 'static,
    F: FederationProvider + Send + Sync + 'static,
{
    let token = state
        .auth
        .federated_login(&req.code, &req.code_verifier, &req.redirect_uri)
        .await?;

    Ok(Json(TokenResponse { token }))
}

// ============================================================================
// Current principal (behind `require_bearer`)
// ============================================================================

/// GET /api/auth/me
pub async fn me(Extension(principal): Extension<VerifiedPrincipal>) -> Json<PrincipalResponse> {
    Json(principal.into())
}
