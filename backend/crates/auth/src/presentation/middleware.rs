//! Auth Middleware
//!
//! Bearer-token guard for protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::application::orchestrator::{AuthOrchestrator, verify_with};
use crate::application::token_codec::TokenCodec;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{Clock, FederationProvider, PasswordHasher};

/// Middleware state
#[derive(Clone)]
pub struct BearerState {
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl BearerState {
    pub fn new(codec: Arc<TokenCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { codec, clock }
    }

    pub fn from_orchestrator<R, H, F>(auth: &AuthOrchestrator<R, H, F>) -> Self
    where
        R: UserStore + RoleStore + Send + Sync,
        H: PasswordHasher,
        F: FederationProvider + Send + Sync,
    {
        Self::new(auth.codec(), auth.clock())
    }
}

/// Middleware that requires a valid bearer token
///
/// On success the `VerifiedPrincipal` is available as a request extension.
pub async fn require_bearer(
    State(state): State<BearerState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("Request without bearer token");
        return Err(AppError::unauthorized("Missing bearer token").into_response());
    };

    let principal = verify_with(&state.codec, state.clock.as_ref(), &token)
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
