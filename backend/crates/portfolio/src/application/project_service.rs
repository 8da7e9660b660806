//! Project Service

use std::sync::Arc;

use kernel::id::ProjectId;

use crate::domain::entity::project::Project;
use crate::domain::input::{ProjectDraft, ProjectPatch};
use crate::domain::repository::ProjectRepository;
use crate::error::{PortfolioError, PortfolioResult};

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: ProjectDraft) -> PortfolioResult<Project> {
        draft.validate()?;

        let project = Project::new(draft);
        self.repo.create_project(&project).await?;

        tracing::info!(project_id = %project.project_id, title = %project.title, "Project created");

        Ok(project)
    }

    pub async fn get(&self, id: &ProjectId) -> PortfolioResult<Project> {
        self.repo
            .find_project(id)
            .await?
            .ok_or(PortfolioError::ProjectNotFound)
    }

    pub async fn update(&self, id: &ProjectId, patch: ProjectPatch) -> PortfolioResult<Project> {
        patch.validate()?;

        let project = self
            .repo
            .update_project(id, &patch)
            .await?
            .ok_or(PortfolioError::ProjectNotFound)?;

        tracing::info!(project_id = %id, "Project updated");

        Ok(project)
    }

    pub async fn delete(&self, id: &ProjectId) -> PortfolioResult<()> {
        if !self.repo.delete_project(id).await? {
            return Err(PortfolioError::ProjectNotFound);
        }

        tracing::info!(project_id = %id, "Project deleted");

        Ok(())
    }

    pub async fn list(&self) -> PortfolioResult<Vec<Project>> {
        let mut projects = self.repo.list_projects().await?;
        projects.sort_by_key(|p| p.order);
        Ok(projects)
    }
}
