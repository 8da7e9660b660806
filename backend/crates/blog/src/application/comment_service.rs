//! Comment Service

use std::sync::Arc;

use auth::Claims;
use kernel::id::{CommentId, PostId};

use crate::domain::entity::comment::Comment;
use crate::domain::input::CommentDraft;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

pub struct CommentService<R>
where
    R: PostRepository + CommentRepository,
{
    repo: Arc<R>,
}

impl<R> CommentService<R>
where
    R: PostRepository + CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Any authenticated user may comment on an existing post
    pub async fn create(
        &self,
        post_id: &PostId,
        draft: CommentDraft,
        author: &Claims,
    ) -> BlogResult<Comment> {
        draft.validate()?;

        if self.repo.find_post(post_id).await?.is_none() {
            return Err(BlogError::PostNotFound);
        }

        let display_name = if author.display_name.is_empty() {
            author.email.clone()
        } else {
            author.display_name.clone()
        };
        let comment = Comment::new(
            *post_id,
            author.sub.clone(),
            author.email.clone(),
            display_name,
            draft.content,
        );

        self.repo.create_comment(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %post_id,
            user_id = %comment.user_id,
            "Comment created"
        );

        Ok(comment)
    }

    /// Oldest first
    pub async fn list(&self, post_id: &PostId) -> BlogResult<Vec<Comment>> {
        let mut comments = self.repo.list_comments(post_id).await?;
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    /// Only the author or an admin may delete
    pub async fn delete(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        caller: &Claims,
    ) -> BlogResult<()> {
        let comment = self
            .repo
            .find_comment(comment_id)
            .await?
            .filter(|comment| comment.post_id == *post_id)
            .ok_or(BlogError::CommentNotFound)?;

        if !caller.is_admin() && !comment.is_authored_by(&caller.sub) {
            tracing::warn!(
                comment_id = %comment_id,
                user_id = %caller.sub,
                "Comment deletion denied"
            );
            return Err(BlogError::NotCommentOwner);
        }

        self.repo.delete_comment(comment_id).await?;

        tracing::info!(comment_id = %comment_id, user_id = %caller.sub, "Comment deleted");

        Ok(())
    }
}
