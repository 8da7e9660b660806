//! Experience Entity

use kernel::id::ExperienceId;
use serde::{Deserialize, Serialize};

use crate::domain::input::ExperienceDraft;

/// One position on the work history page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub experience_id: ExperienceId,
    pub company: String,
    pub role: String,
    pub location: String,
    /// Free-form, e.g. `Jan. 2024`
    pub start_date: String,
    /// Free-form, e.g. `Present`
    pub end_date: String,
    pub bullets: Vec<String>,
    pub logo_url: Option<String>,
    /// Lower sorts first; ties are allowed
    #[serde(default)]
    pub order: i64,
}

impl Experience {
    pub fn new(draft: ExperienceDraft) -> Self {
        Self {
            experience_id: ExperienceId::new(),
            company: draft.company,
            role: draft.role,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            bullets: draft.bullets,
            logo_url: draft.logo_url,
            order: draft.order,
        }
    }
}
