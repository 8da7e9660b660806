//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Item store implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Register / login with email + password, logout, current user
//! - Signed access tokens (JWT) returned in the body and an HTTP-only cookie
//! - Role-based access (`user`, `admin`); admins come from a configured allow-list
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Login failures are indistinguishable (unknown email vs wrong password)
//! - Tokens are stateless and expire; there is no revocation list

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::entity::claims::Claims;
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::item_store::StoreUserRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{AuthGuard, MaybeClaims, optional_auth, require_admin, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
