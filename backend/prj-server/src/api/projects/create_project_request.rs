use crate::api::projects::lenient_fields::{scalar_text, truthy_text};

use prj_core::ProjectDraft;

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/projects`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    /// Project title (required, checked by the service)
    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub description: Option<Value>,
}

impl From<CreateProjectRequest> for ProjectDraft {
    fn from(req: CreateProjectRequest) -> Self {
        ProjectDraft {
            title: truthy_text(req.title),
            description: scalar_text(req.description),
        }
    }
}
