//! Blog Post Entity

use kernel::id::PostId;
use kernel::time;
use serde::{Deserialize, Serialize};

use crate::domain::input::PostDraft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub post_id: PostId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    pub author_email: String,
    pub author_name: String,
    /// Drafts are hidden from the public listing
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl BlogPost {
    /// New posts are published immediately
    pub fn new(draft: PostDraft, author_email: String, author_name: String) -> Self {
        let now = time::now_iso();

        Self {
            post_id: PostId::new(),
            title: draft.title,
            summary: draft.summary,
            content: draft.content,
            tags: draft.tags,
            cover_image_url: draft.cover_image_url,
            author_email,
            author_name,
            is_published: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
