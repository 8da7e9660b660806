//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::PasswordCost;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use crate::domain::value_object::email::Email;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign access tokens
    pub token_secret: String,
    /// `HS256`, `HS384` or `HS512`
    pub token_algorithm: String,
    /// Access token lifetime; also the cookie Max-Age
    pub token_ttl: Duration,
    pub cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Emails that receive the admin role on registration (lower-cased)
    pub admin_emails: Vec<String>,
    pub password_cost: PasswordCost,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: "change-me-in-production".to_string(),
            token_algorithm: "HS256".to_string(),
            token_ttl: Duration::from_secs(1440 * 60), // 24 hours
            cookie_name: "access_token".to_string(),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            admin_emails: Vec::new(),
            password_cost: PasswordCost::default(),
        }
    }
}

impl AuthConfig {
    /// Parse a comma separated allow-list
    pub fn parse_admin_emails(list: &str) -> Vec<String> {
        list.split(',')
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .collect()
    }

    pub fn is_admin_email(&self, email: &Email) -> bool {
        self.admin_emails.iter().any(|admin| admin == email.as_str())
    }

    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Cookie carrying the access token
    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_algorithm", &self.token_algorithm)
            .field("token_ttl", &self.token_ttl)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("admin_emails", &self.admin_emails)
            .field("password_cost", &self.password_cost)
            .finish()
    }
}
