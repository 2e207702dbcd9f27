//! Project entity - the single persisted resource.

use crate::{ObjectId, ProjectChanges};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Assigned by the store on creation, never changes afterwards
    pub id: ObjectId,
    pub title: String,
    pub description: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a new record from validated fields with a freshly generated id.
    pub fn new(changes: &ProjectChanges) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::with_timestamp(now),
            title: changes.title.clone(),
            description: changes.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place: title always replaced, description only when supplied.
    pub fn apply(&mut self, changes: &ProjectChanges) {
        self.title = changes.title.clone();
        if let Some(ref description) = changes.description {
            self.description = Some(description.clone());
        }
        self.updated_at = Utc::now();
    }
}
