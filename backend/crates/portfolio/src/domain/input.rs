//! Validated request inputs

use kernel::error::app_error::AppResult;
use kernel::validate;
use serde::{Deserialize, Serialize};

pub const NAME_MAX_LENGTH: usize = 200;
pub const TECH_STACK_MAX_LENGTH: usize = 500;

// ============================================================================
// Experience
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceDraft {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub order: i64,
}

impl ExperienceDraft {
    pub fn validate(&self) -> AppResult<()> {
        validate::length("company", &self.company, 1, Some(NAME_MAX_LENGTH))?;
        validate::length("role", &self.role, 1, Some(NAME_MAX_LENGTH))?;
        validate::length("location", &self.location, 0, Some(NAME_MAX_LENGTH))?;
        validate::min_items("bullets", &self.bullets, 1)
    }
}

/// Partial experience update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub logo_url: Option<String>,
    pub order: Option<i64>,
}

impl ExperiencePatch {
    pub fn validate(&self) -> AppResult<()> {
        validate::optional_length("company", self.company.as_deref(), 1, Some(NAME_MAX_LENGTH))?;
        validate::optional_length("role", self.role.as_deref(), 1, Some(NAME_MAX_LENGTH))?;
        validate::optional_length("location", self.location.as_deref(), 0, Some(NAME_MAX_LENGTH))?;
        match &self.bullets {
            Some(bullets) => validate::min_items("bullets", bullets, 1),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Project
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub tech_stack: String,
    pub date_range: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub order: i64,
}

impl ProjectDraft {
    pub fn validate(&self) -> AppResult<()> {
        validate::length("title", &self.title, 1, Some(NAME_MAX_LENGTH))?;
        validate::length("tech_stack", &self.tech_stack, 0, Some(TECH_STACK_MAX_LENGTH))?;
        validate::min_items("bullets", &self.bullets, 1)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub tech_stack: Option<String>,
    pub date_range: Option<String>,
    pub bullets: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub order: Option<i64>,
}

impl ProjectPatch {
    pub fn validate(&self) -> AppResult<()> {
        validate::optional_length("title", self.title.as_deref(), 1, Some(NAME_MAX_LENGTH))?;
        validate::optional_length(
            "tech_stack",
            self.tech_stack.as_deref(),
            0,
            Some(TECH_STACK_MAX_LENGTH),
        )?;
        match &self.bullets {
            Some(bullets) => validate::min_items("bullets", bullets, 1),
            None => Ok(()),
        }
    }
}
