//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{IssuedToken, TokenService};

use crate::domain::entity::user::User;

/// Result of a successful register or login
#[derive(Debug)]
pub struct AuthOutput {
    pub token: IssuedToken,
    pub user: User,
}
