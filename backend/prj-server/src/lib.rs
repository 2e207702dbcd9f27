pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::project_body::ProjectBody,
    projects::{
        create_project_request::CreateProjectRequest,
        delete_project_response::DeleteProjectResponse,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
