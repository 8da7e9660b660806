//! Current User Use Case
//!
//! Resolves the caller's account from verified claims.

use std::sync::Arc;

use crate::domain::entity::{claims::Claims, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Looks the user up by the token's email, not its subject
    pub async fn execute(&self, claims: &Claims) -> AuthResult<User> {
        let email = Email::from_stored(claims.email.clone());

        self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
