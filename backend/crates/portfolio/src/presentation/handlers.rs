//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::extract::JsonBody;
use kernel::id::{ExperienceId, ProjectId};

use crate::application::{ExperienceService, ProjectService};
use crate::domain::entity::{experience::Experience, project::Project};
use crate::domain::input::{ExperienceDraft, ExperiencePatch, ProjectDraft, ProjectPatch};
use crate::domain::repository::{ExperienceRepository, ProjectRepository};
use crate::error::{PortfolioError, PortfolioResult};
use crate::presentation::dto::{ExperienceListResponse, ProjectListResponse};

/// Shared state for portfolio handlers
#[derive(Clone)]
pub struct PortfolioAppState<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// Unparsable identifiers cannot name a stored item
fn experience_id(raw: &str) -> PortfolioResult<ExperienceId> {
    raw.parse().map_err(|_| PortfolioError::ExperienceNotFound)
}

fn project_id(raw: &str) -> PortfolioResult<ProjectId> {
    raw.parse().map_err(|_| PortfolioError::ProjectNotFound)
}

// ============================================================================
// Experiences
// ============================================================================

/// GET /api/experiences
pub async fn list_experiences<R>(
    State(state): State<PortfolioAppState<R>>,
) -> PortfolioResult<Json<ExperienceListResponse>>
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let experiences = ExperienceService::new(state.repo.clone()).list().await?;
    Ok(Json(experiences.into()))
}

/// GET /api/experiences/{experience_id}
pub async fn get_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
) -> PortfolioResult<Json<Experience>>
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let id = experience_id(&raw_id)?;
    let experience = ExperienceService::new(state.repo.clone()).get(&id).await?;
    Ok(Json(experience))
}

/// POST /api/experiences
pub async fn create_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    JsonBody(draft): JsonBody<ExperienceDraft>,
) -> PortfolioResult<(StatusCode, Json<Experience>)>
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let experience = ExperienceService::new(state.repo.clone())
        .create(draft)
        .await?;
    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /api/experiences/{experience_id}
pub async fn update_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<ExperiencePatch>,
) -> PortfolioResult<Json<Experience>>
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let id = experience_id(&raw_id)?;
    let experience = ExperienceService::new(state.repo.clone())
        .update(&id, patch)
        .await?;
    Ok(Json(experience))
}

/// DELETE /api/experiences/{experience_id}
pub async fn delete_experience<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
) -> PortfolioResult<StatusCode>
where
    R: ExperienceRepository + Clone + Send + Sync + 'static,
{
    let id = experience_id(&raw_id)?;
    ExperienceService::new(state.repo.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Projects
// ============================================================================

/// GET /api/projects
pub async fn list_projects<R>(
    State(state): State<PortfolioAppState<R>>,
) -> PortfolioResult<Json<ProjectListResponse>>
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let projects = ProjectService::new(state.repo.clone()).list().await?;
    Ok(Json(projects.into()))
}

/// GET /api/projects/{project_id}
pub async fn get_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
) -> PortfolioResult<Json<Project>>
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let id = project_id(&raw_id)?;
    let project = ProjectService::new(state.repo.clone()).get(&id).await?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create_project<R>(
    State(state): State<PortfolioAppState<R>>,
    JsonBody(draft): JsonBody<ProjectDraft>,
) -> PortfolioResult<(StatusCode, Json<Project>)>
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let project = ProjectService::new(state.repo.clone()).create(draft).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{project_id}
pub async fn update_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<ProjectPatch>,
) -> PortfolioResult<Json<Project>>
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let id = project_id(&raw_id)?;
    let project = ProjectService::new(state.repo.clone())
        .update(&id, patch)
        .await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{project_id}
pub async fn delete_project<R>(
    State(state): State<PortfolioAppState<R>>,
    Path(raw_id): Path<String>,
) -> PortfolioResult<StatusCode>
where
    R: ProjectRepository + Clone + Send + Sync + 'static,
{
    let id = project_id(&raw_id)?;
    ProjectService::new(state.repo.clone()).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
