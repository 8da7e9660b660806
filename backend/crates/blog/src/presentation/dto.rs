//! API DTOs

use serde::Serialize;

use crate::domain::entity::{comment::Comment, post::BlogPost};

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<BlogPost>,
    pub count: usize,
}

impl From<Vec<BlogPost>> for PostListResponse {
    fn from(posts: Vec<BlogPost>) -> Self {
        Self {
            count: posts.len(),
            posts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
    pub count: usize,
}

impl From<Vec<Comment>> for CommentListResponse {
    fn from(comments: Vec<Comment>) -> Self {
        Self {
            count: comments.len(),
            comments,
        }
    }
}
