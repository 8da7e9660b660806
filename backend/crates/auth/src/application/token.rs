//! Access token issuance and verification

use chrono::Utc;
use platform::token::{TokenCodec, TokenError, parse_algorithm};

use crate::application::config::AuthConfig;
use crate::domain::entity::{claims::Claims, user::User};
use crate::error::{AuthError, AuthResult};

/// A freshly signed token and the claims inside it
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Signs and verifies access tokens
///
/// Tokens are stateless: there is no revocation, a token stays valid until
/// its `exp`.
#[derive(Clone)]
pub struct TokenService {
    codec: TokenCodec,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let algorithm = parse_algorithm(&config.token_algorithm)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let codec = TokenCodec::new(config.token_secret.as_bytes(), algorithm)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self {
            codec,
            ttl_secs: config.token_ttl_secs(),
        })
    }

    /// Sign a token for `user`, expiring after the configured TTL
    pub fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        let iat = Utc::now().timestamp();
        let claims = Claims::for_user(user, iat, iat.saturating_add(self.ttl_secs));

        let token = self
            .codec
            .encode(&claims)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }

    /// Check signature and expiry
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        self.codec.decode::<Claims>(token).map_err(|e| {
            match e {
                TokenError::Expired => tracing::debug!("Access token expired"),
                _ => tracing::debug!(error = %e, "Access token rejected"),
            }
            AuthError::InvalidOrExpiredToken
        })
    }

    #[cfg(test)]
    pub(crate) fn sign_claims(&self, claims: &Claims) -> String {
        self.codec.encode(claims).unwrap()
    }
}
