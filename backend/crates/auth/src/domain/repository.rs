//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by email (full scan; emails are not indexed)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if a user with this email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
