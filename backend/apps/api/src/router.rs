//! Router composition
//!
//! Every bounded context contributes its own router; they share one item
//! store and one token guard.

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::{AuthAppState, StoreUserRepository, auth_router};
use blog::{StoreBlogRepository, blog_router};
use portfolio::{StorePortfolioRepository, experience_router, project_router};
use storage::ItemStore;

use crate::config::ApiConfig;
use crate::health;

/// Build the full application over any item store
pub fn build_router<S>(store: S, config: &ApiConfig) -> anyhow::Result<Router>
where
    S: ItemStore + Clone + Sync + 'static,
{
    let auth_state = AuthAppState::new(StoreUserRepository::new(store.clone()), config.auth.clone())?;
    let guard = auth_state.guard();
    let portfolio_repo = StorePortfolioRepository::new(store.clone());

    let service_name: Arc<str> = Arc::from(config.app_name.as_str());
    let health = Router::new()
        .route("/api/health", get(health::health))
        .with_state(service_name);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = health
        .nest("/api/auth", auth_router(auth_state))
        .nest("/api/blog", blog_router(StoreBlogRepository::new(store), guard.clone()))
        .nest(
            "/api/experiences",
            experience_router(portfolio_repo.clone(), guard.clone()),
        )
        .nest("/api/projects", project_router(portfolio_repo, guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}
