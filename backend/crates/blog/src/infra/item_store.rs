//! Item store backed post and comment repositories

use kernel::id::{CommentId, PostId};
use storage::{Collection, ItemStore, Record, Table, UpdateSet};

use crate::domain::entity::{comment::Comment, post::BlogPost};
use crate::domain::input::PostPatch;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::BlogResult;

impl Record for BlogPost {
    const TABLE: Table = Table::BlogPosts;
}

impl Record for Comment {
    const TABLE: Table = Table::Comments;
}

/// Posts and comments over any [`ItemStore`]
#[derive(Clone)]
pub struct StoreBlogRepository<S> {
    posts: Collection<S, BlogPost>,
    comments: Collection<S, Comment>,
}

impl<S> StoreBlogRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    pub fn new(store: S) -> Self {
        Self {
            posts: Collection::new(store.clone()),
            comments: Collection::new(store),
        }
    }
}

impl<S> PostRepository for StoreBlogRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    async fn create_post(&self, post: &BlogPost) -> BlogResult<()> {
        self.posts.put(post).await?;
        Ok(())
    }

    async fn find_post(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>> {
        Ok(self.posts.get(&post_id.to_string()).await?)
    }

    async fn list_posts(&self) -> BlogResult<Vec<BlogPost>> {
        Ok(self.posts.scan().await?)
    }

    async fn list_published_posts(&self) -> BlogResult<Vec<BlogPost>> {
        Ok(self.posts.scan_eq("is_published", true).await?)
    }

    async fn update_post(
        &self,
        post_id: &PostId,
        patch: &PostPatch,
        updated_at: &str,
    ) -> BlogResult<Option<BlogPost>> {
        let set = UpdateSet::from_partial(Table::BlogPosts, patch)?.set("updated_at", updated_at);
        Ok(self.posts.update_fields(&post_id.to_string(), set).await?)
    }

    async fn delete_post(&self, post_id: &PostId) -> BlogResult<bool> {
        Ok(self.posts.delete(&post_id.to_string()).await?)
    }
}

impl<S> CommentRepository for StoreBlogRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    async fn create_comment(&self, comment: &Comment) -> BlogResult<()> {
        self.comments.put(comment).await?;
        Ok(())
    }

    async fn find_comment(&self, comment_id: &CommentId) -> BlogResult<Option<Comment>> {
        Ok(self.comments.get(&comment_id.to_string()).await?)
    }

    async fn list_comments(&self, post_id: &PostId) -> BlogResult<Vec<Comment>> {
        Ok(self.comments.scan_eq("post_id", post_id.to_string()).await?)
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> BlogResult<bool> {
        Ok(self.comments.delete(&comment_id.to_string()).await?)
    }
}
