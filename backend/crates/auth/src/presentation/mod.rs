//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, route policy, and the authorization gate.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGateState, CurrentUser, authorize_request};
pub use policy::{RoutePolicy, RoutePolicyTable};
pub use router::{auth_route_policy, auth_router, auth_router_generic};
