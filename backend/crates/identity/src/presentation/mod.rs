//! Presentation Layer
//!
//! HTTP handlers, DTOs, request validation, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod validate;

pub use handlers::IdentityAppState;
pub use middleware::{AuthenticatedUser, BearerAuthState, require_bearer};
pub use router::{identity_router, identity_router_generic};
