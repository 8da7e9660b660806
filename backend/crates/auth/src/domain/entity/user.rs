//! User Entity

use kernel::id::UserId;
use kernel::time;

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword, user_role::UserRole,
};

/// Registered account
///
/// Email is unique across users; uniqueness is checked on registration.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub display_name: DisplayName,
    pub password: UserPassword,
    pub role: UserRole,
    /// ISO-8601 UTC, fixed width
    pub created_at: String,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(
        email: Email,
        display_name: DisplayName,
        password: UserPassword,
        role: UserRole,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            display_name,
            password,
            role,
            created_at: time::now_iso(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
