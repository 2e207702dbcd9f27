//! Project operations: validate input, make one store call, classify the outcome.
//!
//! Check order matters and is part of the contract:
//! - create: title
//! - get / delete: id format
//! - update: title, then id format
//!
//! A malformed id never reaches the store.

use crate::{CoreError, ObjectId, Project, ProjectDraft, ProjectStore, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> CoreErrorResult<Vec<Project>> {
        self.store.find_all().await
    }

    pub async fn create(&self, draft: ProjectDraft) -> CoreErrorResult<Project> {
        let changes = draft.validate()?;

        self.store
            .create(&changes)
            .await?
            .ok_or_else(|| CoreError::NotCreated {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn get(&self, id: &str) -> CoreErrorResult<Project> {
        let id = ObjectId::parse_str(id)?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: &str, draft: ProjectDraft) -> CoreErrorResult<Project> {
        let changes = draft.validate()?;
        let id = ObjectId::parse_str(id)?;

        self.store
            .find_by_id_and_update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Returns the project as it was immediately before removal.
    pub async fn delete(&self, id: &str) -> CoreErrorResult<Project> {
        let id = ObjectId::parse_str(id)?;

        self.store
            .find_by_id_and_delete(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

#[track_caller]
fn not_found(id: ObjectId) -> CoreError {
    CoreError::NotFound {
        id,
        location: ErrorLocation::from(Location::caller()),
    }
}
