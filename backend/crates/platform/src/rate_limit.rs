//! Rate Limiting Infrastructure
//!
//! Fixed-window request limiter keyed by client IP, plus the axum
//! middleware that applies it. The middleware is layered outside the
//! authentication gate: limiting runs first.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::client::extract_client_ip;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 40,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window in-memory rate limiter
///
/// One window per client IP. The map is pruned lazily: expired windows are
/// reset on the next request from the same client, and fully swept once the
/// map grows past a housekeeping threshold.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

const SWEEP_THRESHOLD: usize = 4096;

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request for `key`; returns false when the key is over limit
    pub fn check(&self, key: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        if windows.len() > SWEEP_THRESHOLD {
            let window = self.config.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.config.window {
            entry.started = now;
            entry.count = 0;
        }

        entry.count += 1;
        entry.count <= self.config.max_requests
    }
}

/// axum middleware enforcing the limiter
///
/// Requests with no resolvable client IP bypass the limiter.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let connection_ip = req
        .extensions()
        .get::<ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());

    let client_ip = extract_client_ip(req.headers(), connection_ip);

    if let Some(ip) = client_ip {
        if !limiter.check(ip) {
            return (StatusCode::TOO_MANY_REQUESTS, "Too many requests").into_response();
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::new(RateLimitConfig::new(3, 60));
        let ip: IpAddr = "203.0.113.9".parse().unwrap();

        assert!(limiter.check(ip));
        assert!(limiter.check(ip));
        assert!(limiter.check(ip));
        assert!(!limiter.check(ip));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(RateLimitConfig::new(1, 60));
        let first: IpAddr = "203.0.113.9".parse().unwrap();
        let second: IpAddr = "203.0.113.10".parse().unwrap();

        assert!(limiter.check(first));
        assert!(!limiter.check(first));
        assert!(limiter.check(second));
    }

    #[test]
    fn test_window_resets() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_millis(10),
        });
        let ip: IpAddr = "203.0.113.9".parse().unwrap();

        assert!(limiter.check(ip));
        assert!(!limiter.check(ip));

        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.check(ip));
    }
}
