//! HTTP Handlers

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::extract::JsonBody;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    AuthOutput, CurrentUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::claims::Claims;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::UserPassword;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    DetailResponse, LoginRequest, RegisterRequest, TokenResponse, UserResponse,
};
use crate::presentation::middleware::AuthGuard;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    /// Verified against on logins for unknown emails
    pub decoy_password: Arc<UserPassword>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    /// Fails if the token settings or the password cost are unusable
    pub fn new(repo: R, config: AuthConfig) -> AuthResult<Self> {
        let tokens = TokenService::new(&config)?;
        let decoy_password = UserPassword::decoy(&config.password_cost)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            decoy_password: Arc::new(decoy_password),
        })
    }

    /// Token guard for routes of other modules
    pub fn guard(&self) -> AuthGuard {
        AuthGuard::new(self.tokens.clone(), &self.config.cookie_name)
    }
}

/// Token in the body plus the HTTP-only cookie
fn token_response(config: &AuthConfig, output: AuthOutput) -> Response {
    let cookie = config.cookie().build_set_cookie(&output.token.token);

    (
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse::bearer(output.token.token, &output.user)),
    )
        .into_response()
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            display_name: req.display_name,
            password: req.password,
        })
        .await?;

    Ok(token_response(&state.config, output))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.decoy_password.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(token_response(&state.config, output))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Stateless: only the cookie is cleared, an issued token stays valid until
/// it expires.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie().build_delete_cookie();

    (
        [(header::SET_COOKIE, cookie)],
        Json(DetailResponse {
            detail: "Logged out.".to_string(),
        }),
    )
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<Claims>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&claims).await?;

    Ok(Json(UserResponse::from(&user)))
}
