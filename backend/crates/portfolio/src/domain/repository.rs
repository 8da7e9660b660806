//! Repository Traits

use kernel::id::{ExperienceId, ProjectId};

use crate::domain::entity::{experience::Experience, project::Project};
use crate::domain::input::{ExperiencePatch, ProjectPatch};
use crate::error::PortfolioResult;

#[trait_variant::make(ExperienceRepository: Send)]
pub trait LocalExperienceRepository {
    async fn create_experience(&self, experience: &Experience) -> PortfolioResult<()>;

    async fn find_experience(&self, id: &ExperienceId) -> PortfolioResult<Option<Experience>>;

    /// Unordered
    async fn list_experiences(&self) -> PortfolioResult<Vec<Experience>>;

    async fn update_experience(
        &self,
        id: &ExperienceId,
        patch: &ExperiencePatch,
    ) -> PortfolioResult<Option<Experience>>;

    async fn delete_experience(&self, id: &ExperienceId) -> PortfolioResult<bool>;
}

#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    async fn create_project(&self, project: &Project) -> PortfolioResult<()>;

    async fn find_project(&self, id: &ProjectId) -> PortfolioResult<Option<Project>>;

    async fn list_projects(&self) -> PortfolioResult<Vec<Project>>;

    async fn update_project(
        &self,
        id: &ProjectId,
        patch: &ProjectPatch,
    ) -> PortfolioResult<Option<Project>>;

    async fn delete_project(&self, id: &ProjectId) -> PortfolioResult<bool>;
}
