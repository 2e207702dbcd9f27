//! Project REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, DeleteProjectResponse, ProjectBody,
    ProjectDto, UpdateProjectRequest,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects
///
/// List all projects, in collection order
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.projects.list().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    ProjectBody(req): ProjectBody<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let project = state.projects.create(req.into()).await?;
    log::info!("Created project {}", project.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project = state.projects.get(&id).await?;

    Ok(Json(project.into()))
}

/// PUT /api/projects/{id}
///
/// Title is checked before the id format.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ProjectBody(req): ProjectBody<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectDto>> {
    let project = state
        .projects
        .update(&id, req.into())
        .await
        .map_err(|e| {
            ApiError::from_update_error(e, state.api_config.update_not_found_status)
        })?;
    log::info!("Updated project {}", project.id);

    Ok(Json(project.into()))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProjectResponse>> {
    let project = state.projects.delete(&id).await?;
    log::info!("Deleted project {}", project.id);

    Ok(Json(DeleteProjectResponse {
        message: format!("Project {} deleted", id),
        project: project.into(),
    }))
}
