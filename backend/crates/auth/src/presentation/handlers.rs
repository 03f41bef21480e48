//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, RefreshSessionUseCase, RegisterInput,
    RegisterUseCase, UpdateUserInput, UpdateUserUseCase,
};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthenticatedUserResponse, LoginRequest, RefreshRequest, RegisterRequest, SessionResponse,
    UpdateUserRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<SessionResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Register
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let user = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
            country: req.country,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /auth/refresh
pub async fn refresh_session<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RefreshRequest>,
) -> AuthResult<Json<SessionResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshSessionUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case.execute(req.refresh_token).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /auth/user
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AuthResult<Json<AuthenticatedUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());

    // ゲートが積んだユーザーは使わず、最新の状態を読み直す
    let user = use_case.execute(&user).await?;

    Ok(Json(AuthenticatedUserResponse {
        authenticated_user: user.into(),
    }))
}

// ============================================================================
// Update User
// ============================================================================

/// PATCH /auth/user
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let updated = use_case
        .execute(
            &user,
            UpdateUserInput {
                first_name: req.first_name,
                last_name: req.last_name,
                bio: req.bio,
                country: req.country,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}
