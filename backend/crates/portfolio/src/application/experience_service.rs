//! Experience Service

use std::sync::Arc;

use kernel::id::ExperienceId;

use crate::domain::entity::experience::Experience;
use crate::domain::input::{ExperienceDraft, ExperiencePatch};
use crate::domain::repository::ExperienceRepository;
use crate::error::{PortfolioError, PortfolioResult};

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repo: Arc<R>,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, draft: ExperienceDraft) -> PortfolioResult<Experience> {
        draft.validate()?;

        let experience = Experience::new(draft);
        self.repo.create_experience(&experience).await?;

        tracing::info!(
            experience_id = %experience.experience_id,
            company = %experience.company,
            "Experience created"
        );

        Ok(experience)
    }

    pub async fn get(&self, id: &ExperienceId) -> PortfolioResult<Experience> {
        self.repo
            .find_experience(id)
            .await?
            .ok_or(PortfolioError::ExperienceNotFound)
    }

    pub async fn update(
        &self,
        id: &ExperienceId,
        patch: ExperiencePatch,
    ) -> PortfolioResult<Experience> {
        patch.validate()?;

        let experience = self
            .repo
            .update_experience(id, &patch)
            .await?
            .ok_or(PortfolioError::ExperienceNotFound)?;

        tracing::info!(experience_id = %id, "Experience updated");

        Ok(experience)
    }

    pub async fn delete(&self, id: &ExperienceId) -> PortfolioResult<()> {
        if !self.repo.delete_experience(id).await? {
            return Err(PortfolioError::ExperienceNotFound);
        }

        tracing::info!(experience_id = %id, "Experience deleted");

        Ok(())
    }

    /// Ascending `order`; equal orders keep their scan order
    pub async fn list(&self) -> PortfolioResult<Vec<Experience>> {
        let mut experiences = self.repo.list_experiences().await?;
        experiences.sort_by_key(|e| e.order);
        Ok(experiences)
    }
}
