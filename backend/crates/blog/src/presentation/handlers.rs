//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::Claims;
use kernel::extract::JsonBody;
use kernel::id::{CommentId, PostId};

use crate::application::{CommentService, PostService};
use crate::domain::entity::{comment::Comment, post::BlogPost};
use crate::domain::input::{CommentDraft, PostDraft, PostPatch};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{CommentListResponse, PostListResponse};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// Unparsable identifiers cannot name a stored item
fn post_id(raw: &str) -> BlogResult<PostId> {
    raw.parse().map_err(|_| BlogError::PostNotFound)
}

fn comment_id(raw: &str) -> BlogResult<CommentId> {
    raw.parse().map_err(|_| BlogError::CommentNotFound)
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/blog
pub async fn list_published<R>(State(state): State<BlogAppState<R>>) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let posts = PostService::new(state.repo.clone()).list_published().await?;
    Ok(Json(posts.into()))
}

/// GET /api/blog/all
pub async fn list_all<R>(State(state): State<BlogAppState<R>>) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let posts = PostService::new(state.repo.clone()).list_all().await?;
    Ok(Json(posts.into()))
}

/// GET /api/blog/{post_id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(raw_post_id): Path<String>,
) -> BlogResult<Json<BlogPost>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = post_id(&raw_post_id)?;
    let post = PostService::new(state.repo.clone()).get(&post_id).await?;
    Ok(Json(post))
}

/// POST /api/blog
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(claims): Extension<Claims>,
    JsonBody(draft): JsonBody<PostDraft>,
) -> BlogResult<(StatusCode, Json<BlogPost>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post = PostService::new(state.repo.clone())
        .create(draft, &claims)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/blog/{post_id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(raw_post_id): Path<String>,
    JsonBody(patch): JsonBody<PostPatch>,
) -> BlogResult<Json<BlogPost>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = post_id(&raw_post_id)?;
    let post = PostService::new(state.repo.clone())
        .update(&post_id, patch)
        .await?;
    Ok(Json(post))
}

/// DELETE /api/blog/{post_id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(raw_post_id): Path<String>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = post_id(&raw_post_id)?;
    PostService::new(state.repo.clone()).delete(&post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/blog/{post_id}/comments
///
/// An unknown post simply has no comments.
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(raw_post_id): Path<String>,
) -> BlogResult<Json<CommentListResponse>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comments = match raw_post_id.parse::<PostId>() {
        Ok(post_id) => CommentService::new(state.repo.clone()).list(&post_id).await?,
        Err(_) => Vec::new(),
    };
    Ok(Json(comments.into()))
}

/// POST /api/blog/{post_id}/comments
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path(raw_post_id): Path<String>,
    JsonBody(draft): JsonBody<CommentDraft>,
) -> BlogResult<(StatusCode, Json<Comment>)>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let post_id = post_id(&raw_post_id)?;
    let comment = CommentService::new(state.repo.clone())
        .create(&post_id, draft, &claims)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /api/blog/{post_id}/comments/{comment_id}
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(claims): Extension<Claims>,
    Path((raw_post_id, raw_comment_id)): Path<(String, String)>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comment_id = comment_id(&raw_comment_id)?;
    let post_id = raw_post_id
        .parse::<PostId>()
        .map_err(|_| BlogError::CommentNotFound)?;

    CommentService::new(state.repo.clone())
        .delete(&post_id, &comment_id, &claims)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
