//! User Password Value Object
//!
//! Domain wrapper over `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::PasswordCost;
//!
//! let cost = PasswordCost { memory_kib: 1024, iterations: 1, parallelism: 1 };
//! let raw = RawPassword::new("correct horse battery".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, &cost).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordCost, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized on drop.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (8..=128 characters after NFKC, no control characters)
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("password must be at least {} characters", min))
                    .with_action("Please choose a longer password")
            }

            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("password must be at most {} characters", max))
                    .with_action("Please choose a shorter password")
            }

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("password must not be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Password submitted at login; never rejected by policy
    pub fn for_login(raw: String) -> Self {
        Self(ClearTextPassword::unchecked(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed password in Argon2id PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword, cost: &PasswordCost) -> AppResult<Self> {
        let hashed = raw.inner().hash(cost).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidCost(msg) => {
                AppError::internal(format!("Invalid password hashing cost: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    /// Parse a stored PHC string
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string).map_err(|_| {
            AppError::new(
                ErrorKind::InternalServerError,
                "Invalid password hash in storage",
            )
        })?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Stand-in hash for logins naming no account
    pub fn decoy(cost: &PasswordCost) -> AppResult<Self> {
        HashedPassword::decoy(cost)
            .map(Self)
            .map_err(|e| AppError::internal(format!("Decoy password hashing failed: {}", e)))
    }

    /// Constant-time verification
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================
