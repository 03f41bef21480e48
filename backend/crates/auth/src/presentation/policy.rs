//! Route Authorization Policy
//!
//! Per-route public/protected classification. Declared once at
//! route-registration time and read-only afterwards; the gate consults it
//! with the matched route pattern on every request.

use std::collections::HashSet;

/// Authorization requirement for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// No bearer token required
    Public,
    /// Valid access token required (the default)
    Protected,
}

/// Route pattern → policy table
///
/// Keys are matched route patterns (e.g. `/auth/login`), not raw request
/// paths. Anything not explicitly registered is `Protected`.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicyTable {
    public_routes: HashSet<String>,
}

impl RoutePolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a route pattern as public
    pub fn public(mut self, route: impl Into<String>) -> Self {
        self.public_routes.insert(route.into());
        self
    }

    /// Look up the policy for a matched route pattern
    pub fn policy_for(&self, route: &str) -> RoutePolicy {
        if self.public_routes.contains(route) {
            RoutePolicy::Public
        } else {
            RoutePolicy::Protected
        }
    }
}
