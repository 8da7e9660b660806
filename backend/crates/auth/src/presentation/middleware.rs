//! Auth Middleware
//!
//! Token source priority: the access token cookie, then an
//! `Authorization: Bearer` header. Verified claims are placed in the
//! request extensions for downstream handlers.
//!
//! ```rust,ignore
//! let admin_only = Router::new()
//!     .route("/", post(create_post))
//!     .route_layer(from_fn_with_state(guard, require_admin));
//! ```

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_bearer_token, extract_client_ip};
use platform::cookie::extract_cookie;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::claims::Claims;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGuard {
    tokens: Arc<TokenService>,
    cookie_name: Arc<str>,
}

/// Claims for routes where authentication is optional
#[derive(Debug, Clone)]
pub struct MaybeClaims(pub Option<Claims>);

impl AuthGuard {
    pub fn new(tokens: Arc<TokenService>, cookie_name: &str) -> Self {
        Self {
            tokens,
            cookie_name: Arc::from(cookie_name),
        }
    }

    /// Cookie first, then bearer header
    pub fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.cookie_name).or_else(|| extract_bearer_token(headers))
    }

    /// Verify whatever token the request carries
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<Claims> {
        let token = self
            .extract_token(headers)
            .ok_or(AuthError::NotAuthenticated)?;

        self.tokens.verify(&token)
    }

    /// Like [`Self::authenticate`], but also requires the admin role
    pub fn authorize_admin(&self, headers: &HeaderMap) -> AuthResult<Claims> {
        let claims = self.authenticate(headers)?;

        if !claims.is_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(claims)
    }
}

/// Forwarded-for address, else the peer address when the server exposes it
fn client_ip(req: &Request) -> Option<IpAddr> {
    let direct = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    extract_client_ip(req.headers(), direct)
}

/// Middleware that requires any valid token
pub async fn require_auth(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = guard.authenticate(req.headers())?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that requires a valid token with the admin role
pub async fn require_admin(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = match guard.authorize_admin(req.headers()) {
        Ok(claims) => claims,
        Err(e) => {
            if matches!(e, AuthError::Forbidden) {
                tracing::warn!(
                    client_ip = ?client_ip(&req),
                    path = %req.uri().path(),
                    "Admin route denied"
                );
            }
            return Err(e);
        }
    };
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Middleware that verifies a token if present but never rejects
///
/// Inserts [`MaybeClaims`]; any failure is treated as anonymous.
pub async fn optional_auth(
    State(guard): State<AuthGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    let claims = guard.authenticate(req.headers()).ok();
    req.extensions_mut().insert(MaybeClaims(claims));

    next.run(req).await
}
