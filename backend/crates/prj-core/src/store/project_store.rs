use crate::{ObjectId, Project, ProjectChanges, Result as CoreErrorResult};

use async_trait::async_trait;

/// Single-collection data access for projects.
///
/// Every method is one round trip. `find_by_id_and_update` and
/// `find_by_id_and_delete` must be atomic with respect to other calls on
/// the same id; callers add no locking of their own.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects in collection order (insertion order).
    async fn find_all(&self) -> CoreErrorResult<Vec<Project>>;

    /// Insert a new project; the store assigns the id.
    /// `None` means the write was not applied.
    async fn create(&self, changes: &ProjectChanges) -> CoreErrorResult<Option<Project>>;

    async fn find_by_id(&self, id: ObjectId) -> CoreErrorResult<Option<Project>>;

    /// Returns the post-update record, or `None` if nothing matched.
    async fn find_by_id_and_update(
        &self,
        id: ObjectId,
        changes: &ProjectChanges,
    ) -> CoreErrorResult<Option<Project>>;

    /// Returns the record as it was before removal, or `None` if nothing matched.
    async fn find_by_id_and_delete(&self, id: ObjectId) -> CoreErrorResult<Option<Project>>;
}
