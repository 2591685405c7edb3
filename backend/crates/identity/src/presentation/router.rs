//! Identity Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::token::TokenIssuer;
use crate::domain::repository::ProvisioningRepository;
use crate::infra::postgres::PgIdentityRepository;
use crate::presentation::handlers::{self, IdentityAppState};
use crate::presentation::middleware::{BearerAuthState, require_bearer};

/// Create the identity router with PostgreSQL repository
pub fn identity_router(repo: PgIdentityRepository, config: IdentityConfig) -> Router {
    identity_router_generic(repo, config)
}

/// Create a generic identity router for any repository implementation
pub fn identity_router_generic<R>(repo: R, config: IdentityConfig) -> Router
where
    R: ProvisioningRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenIssuer::new(&config));

    let state = IdentityAppState {
        repo: Arc::new(repo),
        tokens: tokens.clone(),
    };

    let auth_state = BearerAuthState { tokens };

    // PUT / is the only protected route; the bearer middleware resolves the
    // caller's identity before the handler runs.
    let protected = Router::new()
        .route("/", put(handlers::update_profile::<R>))
        .route_layer(middleware::from_fn_with_state(auth_state, require_bearer));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/bulk", get(handlers::search_directory::<R>))
        .merge(protected)
        .with_state(state)
}
