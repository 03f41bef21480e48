//! Authorization Gate Middleware
//!
//! Runs on every request after rate limiting and before any handler:
//! resolves the matched route's policy, and for protected routes verifies
//! the bearer access token and binds the resolved user to the request.

use axum::body::Body;
use axum::extract::{MatchedPath, State};
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;
use crate::presentation::policy::{RoutePolicy, RoutePolicyTable};

/// Gate state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub policy: Arc<RoutePolicyTable>,
}

/// The authenticated user bound to a request by the gate
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Route authorization gate
///
/// Public routes pass through with no identity bound. Protected routes
/// fail with 401 before the handler runs unless a valid bearer access
/// token resolves to an existing user.
pub async fn authorize_request<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    // The policy table is keyed by route pattern, so consult the matched
    // path. Requests that matched no route go straight through to the
    // router's 404.
    let Some(route) = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
    else {
        return Ok(next.run(req).await);
    };

    if state.policy.policy_for(&route) == RoutePolicy::Public {
        return Ok(next.run(req).await);
    }

    let token = bearer_token(req.headers())
        .ok_or_else(|| AuthError::InvalidToken.into_response())?
        .to_string();

    let claims = TokenService::new(state.config.clone())
        .verify_access(&token)
        .map_err(|e| e.into_response())?;

    let user = state
        .repo
        .find_by_id(UserId::from_i64(claims.sub))
        .await
        .map_err(|e| e.into_response())?
        .ok_or_else(|| AuthError::UserNotFound.into_response())?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        assert_eq!(bearer_token(&headers), None);

        let empty = HeaderMap::new();
        assert_eq!(bearer_token(&empty), None);
    }
}
