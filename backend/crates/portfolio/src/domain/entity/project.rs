//! Project Entity

use kernel::id::ProjectId;
use serde::{Deserialize, Serialize};

use crate::domain::input::ProjectDraft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    pub title: String,
    pub tech_stack: String,
    pub date_range: String,
    pub bullets: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub order: i64,
}

impl Project {
    pub fn new(draft: ProjectDraft) -> Self {
        Self {
            project_id: ProjectId::new(),
            title: draft.title,
            tech_stack: draft.tech_stack,
            date_range: draft.date_range,
            bullets: draft.bullets,
            github_url: draft.github_url,
            live_url: draft.live_url,
            cover_image_url: draft.cover_image_url,
            order: draft.order,
        }
    }
}
