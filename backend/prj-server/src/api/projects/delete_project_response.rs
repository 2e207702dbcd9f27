use crate::ProjectDto;

use serde::{Deserialize, Serialize};

/// Response for a successful delete: the project as it was before removal
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteProjectResponse {
    pub message: String,
    pub project: ProjectDto,
}
