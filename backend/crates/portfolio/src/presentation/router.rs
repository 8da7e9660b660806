//! Portfolio Routers
//!
//! Listings and single entries are public; every write requires the
//! admin role.

use auth::{AuthGuard, require_admin};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{ExperienceRepository, ProjectRepository};
use crate::presentation::handlers::{self, PortfolioAppState};

/// Routes mounted under `/api/experiences`
pub fn experience_router<R>(repo: R, guard: AuthGuard) -> Router
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let state = PortfolioAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/", get(handlers::list_experiences::<R>))
        .route("/{experience_id}", get(handlers::get_experience::<R>));

    let admin = Router::new()
        .route("/", post(handlers::create_experience::<R>))
        .route(
            "/{experience_id}",
            put(handlers::update_experience::<R>).delete(handlers::delete_experience::<R>),
        )
        .route_layer(from_fn_with_state(guard, require_admin));

    public.merge(admin).with_state(state)
}

/// Routes mounted under `/api/projects`
pub fn project_router<R>(repo: R, guard: AuthGuard) -> Router
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let state = PortfolioAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/", get(handlers::list_projects::<R>))
        .route("/{project_id}", get(handlers::get_project::<R>));

    let admin = Router::new()
        .route("/", post(handlers::create_project::<R>))
        .route(
            "/{project_id}",
            put(handlers::update_project::<R>).delete(handlers::delete_project::<R>),
        )
        .route_layer(from_fn_with_state(guard, require_admin));

    public.merge(admin).with_state(state)
}
