//! Item store backed experience and project repositories

use kernel::id::{ExperienceId, ProjectId};
use storage::{Collection, ItemStore, Record, Table, UpdateSet};

use crate::domain::entity::{experience::Experience, project::Project};
use crate::domain::input::{ExperiencePatch, ProjectPatch};
use crate::domain::repository::{ExperienceRepository, ProjectRepository};
use crate::error::PortfolioResult;

impl Record for Experience {
    const TABLE: Table = Table::Experiences;
}

impl Record for Project {
    const TABLE: Table = Table::Projects;
}

#[derive(Clone)]
pub struct StorePortfolioRepository<S> {
    experiences: Collection<S, Experience>,
    projects: Collection<S, Project>,
}

impl<S> StorePortfolioRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    pub fn new(store: S) -> Self {
        Self {
            experiences: Collection::new(store.clone()),
            projects: Collection::new(store),
        }
    }
}

impl<S> ExperienceRepository for StorePortfolioRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    async fn create_experience(&self, experience: &Experience) -> PortfolioResult<()> {
        self.experiences.put(experience).await?;
        Ok(())
    }

    async fn find_experience(&self, id: &ExperienceId) -> PortfolioResult<Option<Experience>> {
        Ok(self.experiences.get(&id.to_string()).await?)
    }

    async fn list_experiences(&self) -> PortfolioResult<Vec<Experience>> {
        Ok(self.experiences.scan().await?)
    }

    async fn update_experience(
        &self,
        id: &ExperienceId,
        patch: &ExperiencePatch,
    ) -> PortfolioResult<Option<Experience>> {
        let set = UpdateSet::from_partial(Table::Experiences, patch)?;
        Ok(self.experiences.update_fields(&id.to_string(), set).await?)
    }

    async fn delete_experience(&self, id: &ExperienceId) -> PortfolioResult<bool> {
        Ok(self.experiences.delete(&id.to_string()).await?)
    }
}

impl<S> ProjectRepository for StorePortfolioRepository<S>
where
    S: ItemStore + Clone + Sync,
{
    async fn create_project(&self, project: &Project) -> PortfolioResult<()> {
        self.projects.put(project).await?;
        Ok(())
    }

    async fn find_project(&self, id: &ProjectId) -> PortfolioResult<Option<Project>> {
        Ok(self.projects.get(&id.to_string()).await?)
    }

    async fn list_projects(&self) -> PortfolioResult<Vec<Project>> {
        Ok(self.projects.scan().await?)
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        patch: &ProjectPatch,
    ) -> PortfolioResult<Option<Project>> {
        let set = UpdateSet::from_partial(Table::Projects, patch)?;
        Ok(self.projects.update_fields(&id.to_string(), set).await?)
    }

    async fn delete_project(&self, id: &ProjectId) -> PortfolioResult<bool> {
        Ok(self.projects.delete(&id.to_string()).await?)
    }
}
