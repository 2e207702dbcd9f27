use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";

/// Candidate project fields as submitted by a client, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Validated fields for a create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChanges {
    /// Never empty
    pub title: String,
    /// `None` leaves the stored description untouched on update
    pub description: Option<String>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// A missing or empty title is rejected.
    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<ProjectChanges> {
        match self.title {
            Some(title) if !title.is_empty() => Ok(ProjectChanges {
                title,
                description: self.description,
            }),
            _ => Err(CoreError::Validation {
                message: TITLE_REQUIRED_MESSAGE.to_string(),
                field: Some("title".to_string()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
