//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::application::orchestrator::AuthOrchestrator;
use crate::domain::repository::{RoleStore, UserStore};
use crate::domain::service::{FederationProvider, PasswordHasher};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{BearerState, require_bearer};

/// Create the Auth router for any store / hasher / provider combination
pub fn auth_router<R, H, F>(auth: AuthOrchestrator<R, H, F>) -> Router
where
    R: UserStore + RoleStore + Send + Sync + 'static,
    H: PasswordHasher + 'static,
    F: FederationProvider + Send + Sync + 'static,
{
    let bearer = BearerState::from_orchestrator(&auth);
    let state = AuthAppState { auth };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(bearer, require_bearer));

    Router::new()
        .route("/login", post(handlers::login::<R, H, F>))
        .route("/register", post(handlers::register::<R, H, F>))
        .route("/exchange-code", post(handlers::exchange_code::<R, H, F>))
        .with_state(state)
        .merge(protected)
}
