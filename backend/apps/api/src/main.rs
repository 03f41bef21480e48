//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use
//! `kernel::error::AppError`.
//!
//! Middleware order matters: the rate limiter is layered OUTSIDE the
//! authorization gate, so limiting runs before any token verification, and
//! the gate runs before every handler.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::middleware::{AuthGateState, authorize_request};
use auth::router::{auth_route_policy, auth_router};
use auth::{AuthConfig, PgUserRepository};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use kernel::error::app_error::{AppError, AppResult};
use platform::rate_limit::{RateLimitConfig, RateLimiter, rate_limit_middleware};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing secret: injected once at startup, never a mutable global
    let auth_config = match env::var("JWT_SECRET") {
        Ok(secret) => AuthConfig::new(secret),
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random development secret");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("JWT_SECRET must be set in production"),
    };
    let auth_config = Arc::new(auth_config);

    // Route policy: declared here, at registration time
    let policy = Arc::new(auth_route_policy().public("/health"));

    let repo = PgUserRepository::new(pool.clone());

    let gate_state = AuthGateState {
        repo: Arc::new(repo.clone()),
        config: auth_config.clone(),
        policy,
    };

    // 40 requests per minute per client IP
    let limiter = Arc::new(RateLimiter::new(RateLimitConfig::new(40, 60)));

    // CORS configuration
    let cors_methods = AllowMethods::list([
        Method::GET,
        Method::HEAD,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
        Method::OPTIONS,
    ]);
    let cors_headers = AllowHeaders::list([
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
    ]);

    let cors = match env::var("FRONTEND_ORIGINS") {
        Ok(origins) if origins.trim() != "*" => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(cors_methods)
                .allow_headers(cors_headers)
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(cors_methods)
            .allow_headers(cors_headers),
    };

    // Build router: gate innermost, then rate limiter, then trace/CORS
    let app = Router::new()
        .nest("/auth", auth_router(repo, auth_config))
        .merge(
            Router::new()
                .route("/health", get(health))
                .with_state(pool.clone()),
        )
        .layer(middleware::from_fn_with_state(
            gate_state,
            authorize_request::<PgUserRepository>,
        ))
        .layer(middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// GET /health - service and database status
async fn health(State(pool): State<PgPool>) -> AppResult<Json<serde_json::Value>> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Health check failed");
            AppError::service_unavailable("Database unreachable")
        })?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": "up",
    })))
}
