//! Register Use Case
//!
//! Creates a new user account and signs a token for it.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::AuthOutput;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthOutput> {
        let email = Email::new(input.email)?;
        let display_name = DisplayName::new(input.display_name)?;
        let raw_password = RawPassword::new(input.password)?;

        // Uniqueness is a scan over the users table; there is no index
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateUser);
        }

        let role = if self.config.is_admin_email(&email) {
            UserRole::Admin
        } else {
            UserRole::User
        };

        let password = UserPassword::from_raw(&raw_password, &self.config.password_cost)?;
        let user = User::new(email, display_name, password, role);

        self.user_repo.create(&user).await?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            role = %user.role,
            "User registered"
        );

        Ok(AuthOutput { token, user })
    }
}
