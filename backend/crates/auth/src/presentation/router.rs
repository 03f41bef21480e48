//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::policy::RoutePolicyTable;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/register", post(handlers::register::<R>))
        .route("/refresh", post(handlers::refresh_session::<R>))
        .route(
            "/user",
            get(handlers::current_user::<R>).patch(handlers::update_user::<R>),
        )
        .with_state(state)
}

/// Route policy for the auth endpoints, assuming they are nested at `/auth`
///
/// Login and registration are public by definition. Refresh is public as
/// well: the refresh token itself is the credential it consumes.
/// Everything else, here and in the rest of the application, defaults to
/// protected.
pub fn auth_route_policy() -> RoutePolicyTable {
    RoutePolicyTable::new()
        .public("/auth/login")
        .public("/auth/register")
        .public("/auth/refresh")
}
