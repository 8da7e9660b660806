//! Validated request inputs

use kernel::error::app_error::AppResult;
use kernel::validate;
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LENGTH: usize = 200;
pub const SUMMARY_MAX_LENGTH: usize = 500;
pub const COMMENT_MAX_LENGTH: usize = 2000;

/// Fields of a new post
#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl PostDraft {
    pub fn validate(&self) -> AppResult<()> {
        validate::length("title", &self.title, 1, Some(TITLE_MAX_LENGTH))?;
        validate::length("summary", &self.summary, 0, Some(SUMMARY_MAX_LENGTH))?;
        validate::length("content", &self.content, 1, None)
    }
}

/// Partial post update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image_url: Option<String>,
    pub is_published: Option<bool>,
}

impl PostPatch {
    pub fn validate(&self) -> AppResult<()> {
        validate::optional_length("title", self.title.as_deref(), 1, Some(TITLE_MAX_LENGTH))?;
        validate::optional_length("summary", self.summary.as_deref(), 0, Some(SUMMARY_MAX_LENGTH))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentDraft {
    pub content: String,
}

impl CommentDraft {
    pub fn validate(&self) -> AppResult<()> {
        validate::length("content", &self.content, 1, Some(COMMENT_MAX_LENGTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Hello".to_string(),
            summary: String::new(),
            content: "Body".to_string(),
            tags: vec![],
            cover_image_url: None,
        }
    }

    #[test]
    fn test_post_draft_bounds() {
        assert!(draft().validate().is_ok());

        let empty_title = PostDraft {
            title: String::new(),
            ..draft()
        };
        assert!(empty_title.validate().is_err());

        let long_title = PostDraft {
            title: "t".repeat(201),
            ..draft()
        };
        assert!(long_title.validate().is_err());

        let long_summary = PostDraft {
            summary: "s".repeat(501),
            ..draft()
        };
        assert!(long_summary.validate().is_err());

        let empty_content = PostDraft {
            content: String::new(),
            ..draft()
        };
        assert!(empty_content.validate().is_err());
    }

    #[test]
    fn test_post_draft_defaults() {
        let draft: PostDraft =
            serde_json::from_str(r#"{"title":"T","summary":"S","content":"C"}"#).unwrap();
        assert!(draft.tags.is_empty());
        assert!(draft.cover_image_url.is_none());
    }

    #[test]
    fn test_patch_only_checks_present_fields() {
        assert!(PostPatch::default().validate().is_ok());

        let patch = PostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_comment_bounds() {
        assert!(CommentDraft { content: "hi".to_string() }.validate().is_ok());
        assert!(CommentDraft { content: String::new() }.validate().is_err());
        assert!(
            CommentDraft { content: "c".repeat(2001) }
                .validate()
                .is_err()
        );
    }
}
