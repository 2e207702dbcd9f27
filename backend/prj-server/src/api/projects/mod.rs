pub mod create_project_request;
pub mod delete_project_response;
pub mod lenient_fields;
pub mod project_dto;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod update_project_request;
