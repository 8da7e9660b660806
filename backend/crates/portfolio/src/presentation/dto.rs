//! API DTOs

use serde::Serialize;

use crate::domain::entity::{experience::Experience, project::Project};

#[derive(Debug, Serialize)]
pub struct ExperienceListResponse {
    pub experiences: Vec<Experience>,
    pub count: usize,
}

impl From<Vec<Experience>> for ExperienceListResponse {
    fn from(experiences: Vec<Experience>) -> Self {
        Self {
            count: experiences.len(),
            experiences,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub count: usize,
}

impl From<Vec<Project>> for ProjectListResponse {
    fn from(projects: Vec<Project>) -> Self {
        Self {
            count: projects.len(),
            projects,
        }
    }
}
