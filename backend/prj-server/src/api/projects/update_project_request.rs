use crate::api::projects::lenient_fields::{scalar_text, truthy_text};

use prj_core::ProjectDraft;

use serde::Deserialize;
use serde_json::Value;

/// Body of `PUT /api/projects/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    /// Replaces the stored title (required)
    #[serde(default)]
    pub title: Option<Value>,

    /// Replaces the stored description when present; absent or null keeps it
    #[serde(default)]
    pub description: Option<Value>,
}

impl From<UpdateProjectRequest> for ProjectDraft {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectDraft {
            title: truthy_text(req.title),
            description: scalar_text(req.description),
        }
    }
}
