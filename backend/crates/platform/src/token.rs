//! Signed Tokens
//!
//! HMAC-signed JWTs. The codec is agnostic of the claim set; callers bring
//! their own `Serialize`/`Deserialize` claims type, which must carry an
//! `exp` field (seconds since the epoch).

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// HMAC algorithms accepted for signing
pub const SUPPORTED_ALGORITHMS: &[Algorithm] = &[Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Token signing secret must not be empty")]
    EmptySecret,

    #[error("Token encoding failed: {0}")]
    Encoding(String),

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

/// Parse an algorithm name such as `HS256`
pub fn parse_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    let algorithm = Algorithm::from_str(name.trim())
        .map_err(|_| TokenError::UnsupportedAlgorithm(name.to_string()))?;

    if !SUPPORTED_ALGORITHMS.contains(&algorithm) {
        return Err(TokenError::UnsupportedAlgorithm(name.to_string()));
    }

    Ok(algorithm)
}

/// Encodes and verifies signed tokens with a shared secret
#[derive(Clone)]
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        if !SUPPORTED_ALGORITHMS.contains(&algorithm) {
            return Err(TokenError::UnsupportedAlgorithm(format!("{algorithm:?}")));
        }

        let mut validation = Validation::new(algorithm);
        // Expiry is exact: a token is dead the second `exp` passes
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            algorithm,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }

    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(self.algorithm), claims, &self.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature, algorithm and expiry, then decode the claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
