//! Identity (Identity & Account Provisioning) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup with transactional ledger-account initialization
//! - Signin with username (email) + password
//! - Bearer-token authentication (signed JWT, `userId` claim)
//! - Partial profile updates for the authenticated user
//! - Unauthenticated directory search over names
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, cleartext zeroized after use
//! - Username uniqueness enforced by a store-level unique index
//! - Tokens signed with a startup-provided secret and carry an expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use application::token::TokenIssuer;
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgIdentityRepository;
pub use presentation::router::identity_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
