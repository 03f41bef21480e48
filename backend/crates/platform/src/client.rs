//! Client identification utilities
//!
//! Common functions for identifying clients via HTTP headers.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Extract client IP address from headers
///
/// Checks the `X-Forwarded-For` header first (for reverse proxy setups),
/// then falls back to the direct connection IP. With multiple forwarded
/// hops, the left-most entry is the original client.
pub fn extract_client_ip(headers: &HeaderMap, connection_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok())
        .or(connection_ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );

        let direct: IpAddr = "192.168.1.1".parse().unwrap();
        let ip = extract_client_ip(&headers, Some(direct));
        assert_eq!(ip, Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_fallback_to_connection_ip() {
        let headers = HeaderMap::new();
        let direct: IpAddr = "192.168.1.1".parse().unwrap();
        assert_eq!(extract_client_ip(&headers, Some(direct)), Some(direct));
    }

    #[test]
    fn test_garbage_header_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));

        let direct: IpAddr = "192.168.1.1".parse().unwrap();
        assert_eq!(extract_client_ip(&headers, Some(direct)), Some(direct));
    }

    #[test]
    fn test_nothing_available() {
        let headers = HeaderMap::new();
        assert_eq!(extract_client_ip(&headers, None), None);
    }
}
