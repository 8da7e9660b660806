//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). A variable that is present but unparsable aborts startup with
//! its name in the message.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, anyhow};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::password::PasswordCost;
use platform::readiness::ReadinessPolicy;
use platform::token::parse_algorithm;

pub const DEFAULT_APP_NAME: &str = "PersonalSite API";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub app_name: String,
    pub bind_addr: SocketAddr,
    /// Absent means the in-memory store
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_readiness: ReadinessPolicy,
    pub cors_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let defaults = AuthConfig::default();
        let default_cost = PasswordCost::default();

        let password_cost = PasswordCost {
            memory_kib: parse(&var, "PASSWORD_MEMORY_KIB", default_cost.memory_kib)?,
            iterations: parse(&var, "PASSWORD_ITERATIONS", default_cost.iterations)?,
            parallelism: parse(&var, "PASSWORD_PARALLELISM", default_cost.parallelism)?,
        };
        password_cost
            .validate()
            .context("invalid PASSWORD_MEMORY_KIB / PASSWORD_ITERATIONS / PASSWORD_PARALLELISM")?;

        let expire_minutes: u64 = parse(&var, "JWT_EXPIRE_MINUTES", 1440)?;
        if expire_minutes == 0 {
            return Err(anyhow!("invalid JWT_EXPIRE_MINUTES: must be positive"));
        }
        let token_ttl = expire_minutes
            .checked_mul(60)
            .filter(|secs| i64::try_from(*secs).is_ok())
            .map(Duration::from_secs)
            .ok_or_else(|| anyhow!("invalid JWT_EXPIRE_MINUTES={expire_minutes}: too large"))?;

        let token_algorithm = var("JWT_ALGORITHM").unwrap_or(defaults.token_algorithm);
        parse_algorithm(&token_algorithm)
            .with_context(|| format!("invalid JWT_ALGORITHM={token_algorithm:?}"))?;

        let auth = AuthConfig {
            token_secret: var("JWT_SECRET_KEY").unwrap_or(defaults.token_secret),
            token_algorithm,
            token_ttl,
            cookie_name: var("COOKIE_NAME").unwrap_or(defaults.cookie_name),
            cookie_secure: parse(&var, "COOKIE_SECURE", defaults.cookie_secure)?,
            cookie_same_site: parse(&var, "COOKIE_SAMESITE", defaults.cookie_same_site)?,
            admin_emails: AuthConfig::parse_admin_emails(
                &var("ADMIN_EMAILS").unwrap_or_else(|| "admin@example.com".to_string()),
            ),
            password_cost,
        };

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow!("invalid CORS_ORIGINS entry {origin:?}: {e}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let readiness = ReadinessPolicy::default();

        Ok(Self {
            app_name: var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            bind_addr: parse(&var, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            database_url: var("DATABASE_URL"),
            db_max_connections: parse(&var, "DB_MAX_CONNECTIONS", 5)?,
            db_readiness: ReadinessPolicy {
                max_attempts: parse(&var, "DB_READY_MAX_ATTEMPTS", readiness.max_attempts)?,
                delay: Duration::from_secs(parse(
                    &var,
                    "DB_READY_DELAY_SECS",
                    readiness.delay.as_secs(),
                )?),
            },
            cors_origins,
            auth,
        })
    }
}

fn parse<T, F>(var: &F, name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid {name}={raw:?}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::application::config::SameSite;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.app_name, "PersonalSite API");
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.database_url.is_none());
        assert_eq!(config.db_readiness.max_attempts, 30);
        assert_eq!(config.db_readiness.delay, Duration::from_secs(2));
        assert_eq!(config.auth.token_ttl_secs(), 1440 * 60);
        assert_eq!(config.auth.cookie_name, "access_token");
        assert_eq!(config.auth.cookie_same_site, SameSite::Lax);
        assert!(!config.auth.cookie_secure);
        assert_eq!(config.auth.admin_emails, vec!["admin@example.com"]);
        assert_eq!(config.cors_origins.len(), 1);
        assert_eq!(config.cors_origins[0], "http://localhost:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("JWT_EXPIRE_MINUTES", "30"),
            ("COOKIE_SECURE", "true"),
            ("COOKIE_SAMESITE", "Strict"),
            ("ADMIN_EMAILS", " Me@Example.com , you@example.com"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/site"));
        assert_eq!(config.auth.token_ttl_secs(), 30 * 60);
        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.cookie_same_site, SameSite::Strict);
        assert_eq!(
            config.auth.admin_emails,
            vec!["me@example.com", "you@example.com"]
        );
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn test_invalid_value_names_variable() {
        let err = config(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));

        let err = config(&[("COOKIE_SAMESITE", "sometimes")]).unwrap_err();
        assert!(err.to_string().contains("COOKIE_SAMESITE"));

        let err = config(&[("JWT_EXPIRE_MINUTES", "0")]).unwrap_err();
        assert!(err.to_string().contains("JWT_EXPIRE_MINUTES"));
    }

    #[test]
    fn test_token_settings_are_checked_at_load() {
        let err = config(&[("JWT_ALGORITHM", "RS256")]).unwrap_err();
        assert!(err.to_string().contains("JWT_ALGORITHM"), "{err}");

        let huge = u64::MAX.to_string();
        let err = config(&[("JWT_EXPIRE_MINUTES", huge.as_str())]).unwrap_err();
        assert!(err.to_string().contains("JWT_EXPIRE_MINUTES"), "{err}");

        let config = config(&[("JWT_ALGORITHM", "HS512")]).unwrap();
        assert_eq!(config.auth.token_algorithm, "HS512");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config(&[("BIND_ADDR", "  "), ("APP_NAME", "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }
}
