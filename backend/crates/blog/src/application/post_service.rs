//! Post Service

use std::sync::Arc;

use auth::Claims;
use kernel::id::PostId;
use kernel::time;

use crate::domain::entity::post::BlogPost;
use crate::domain::input::{PostDraft, PostPatch};
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

pub struct PostService<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> PostService<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Author fields come from the admin's token
    pub async fn create(&self, draft: PostDraft, author: &Claims) -> BlogResult<BlogPost> {
        draft.validate()?;

        let author_name = if author.display_name.is_empty() {
            author.email.clone()
        } else {
            author.display_name.clone()
        };
        let post = BlogPost::new(draft, author.email.clone(), author_name);

        self.repo.create_post(&post).await?;

        tracing::info!(post_id = %post.post_id, author = %post.author_email, "Blog post created");

        Ok(post)
    }

    pub async fn get(&self, post_id: &PostId) -> BlogResult<BlogPost> {
        self.repo
            .find_post(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }

    /// Only present fields change; `updated_at` is always refreshed
    pub async fn update(&self, post_id: &PostId, patch: PostPatch) -> BlogResult<BlogPost> {
        patch.validate()?;

        let post = self
            .repo
            .update_post(post_id, &patch, &time::now_iso())
            .await?
            .ok_or(BlogError::PostNotFound)?;

        tracing::info!(post_id = %post_id, "Blog post updated");

        Ok(post)
    }

    pub async fn delete(&self, post_id: &PostId) -> BlogResult<()> {
        if !self.repo.delete_post(post_id).await? {
            return Err(BlogError::PostNotFound);
        }

        tracing::info!(post_id = %post_id, "Blog post deleted");

        Ok(())
    }

    /// Published posts, newest first
    pub async fn list_published(&self) -> BlogResult<Vec<BlogPost>> {
        let mut posts = self.repo.list_published_posts().await?;
        newest_first(&mut posts);
        Ok(posts)
    }

    /// Every post including drafts, newest first
    pub async fn list_all(&self) -> BlogResult<Vec<BlogPost>> {
        let mut posts = self.repo.list_posts().await?;
        newest_first(&mut posts);
        Ok(posts)
    }
}

// Timestamps are fixed-width UTC, so string order is time order
fn newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
