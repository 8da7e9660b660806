//! Login Use Case
//!
//! Every failure (malformed email, unknown email, wrong password) is the
//! same `InvalidCredentials` error, and each one costs a password
//! verification.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::application::AuthOutput;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    decoy: Arc<UserPassword>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, decoy: Arc<UserPassword>) -> Self {
        Self {
            user_repo,
            tokens,
            decoy,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthOutput> {
        let raw_password = RawPassword::for_login(input.password);

        let user = match Email::new(input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            self.decoy.verify(&raw_password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthOutput { token, user })
    }
}
