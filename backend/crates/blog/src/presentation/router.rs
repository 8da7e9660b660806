//! Blog Router
//!
//! Reads are public. Writing posts requires the admin role; commenting
//! requires any signed-in user.

use auth::{AuthGuard, require_admin, require_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router for any repository implementation
pub fn blog_router<R>(repo: R, guard: AuthGuard) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/", get(handlers::list_published::<R>))
        .route("/{post_id}", get(handlers::get_post::<R>))
        .route("/{post_id}/comments", get(handlers::list_comments::<R>));

    let admin = Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route("/all", get(handlers::list_all::<R>))
        .route(
            "/{post_id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(from_fn_with_state(guard.clone(), require_admin));

    let members = Router::new()
        .route("/{post_id}/comments", post(handlers::create_comment::<R>))
        .route(
            "/{post_id}/comments/{comment_id}",
            delete(handlers::delete_comment::<R>),
        )
        .route_layer(from_fn_with_state(guard, require_auth));

    public.merge(admin).merge(members).with_state(state)
}
