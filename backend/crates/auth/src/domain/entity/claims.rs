//! Token Claims
//!
//! Decoded payload of a signed access token. Downstream handlers read the
//! caller's identity from here; there is no per-request user lookup.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    /// Issued at (seconds since the epoch)
    pub iat: i64,
    /// Expiry (seconds since the epoch)
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, iat: i64, exp: i64) -> Self {
        Self {
            sub: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            role: user.role,
            display_name: user.display_name.as_str().to_string(),
            iat,
            exp,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
