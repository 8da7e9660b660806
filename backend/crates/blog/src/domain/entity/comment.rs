//! Comment Entity

use kernel::id::{CommentId, PostId};
use kernel::time;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    /// Not checked by storage; the service verifies the post on creation
    pub post_id: PostId,
    /// Subject of the author's token
    pub user_id: String,
    pub user_email: String,
    pub display_name: String,
    pub content: String,
    pub created_at: String,
}

impl Comment {
    pub fn new(
        post_id: PostId,
        user_id: String,
        user_email: String,
        display_name: String,
        content: String,
    ) -> Self {
        Self {
            comment_id: CommentId::new(),
            post_id,
            user_id,
            user_email,
            display_name,
            content,
            created_at: time::now_iso(),
        }
    }

    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
