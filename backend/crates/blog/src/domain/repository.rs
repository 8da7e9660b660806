//! Repository Traits

use kernel::id::{CommentId, PostId};

use crate::domain::entity::{comment::Comment, post::BlogPost};
use crate::domain::input::PostPatch;
use crate::error::BlogResult;

#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create_post(&self, post: &BlogPost) -> BlogResult<()>;

    async fn find_post(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>>;

    /// Every post, drafts included, unordered
    async fn list_posts(&self) -> BlogResult<Vec<BlogPost>>;

    async fn list_published_posts(&self) -> BlogResult<Vec<BlogPost>>;

    /// Apply the present fields of `patch` and stamp `updated_at`
    async fn update_post(
        &self,
        post_id: &PostId,
        patch: &PostPatch,
        updated_at: &str,
    ) -> BlogResult<Option<BlogPost>>;

    async fn delete_post(&self, post_id: &PostId) -> BlogResult<bool>;
}

#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    async fn create_comment(&self, comment: &Comment) -> BlogResult<()>;

    async fn find_comment(&self, comment_id: &CommentId) -> BlogResult<Option<Comment>>;

    /// Comments on one post, unordered
    async fn list_comments(&self, post_id: &PostId) -> BlogResult<Vec<Comment>>;

    async fn delete_comment(&self, comment_id: &CommentId) -> BlogResult<bool>;
}
