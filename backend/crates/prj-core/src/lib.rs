pub mod error;
pub mod models;
pub mod service;
pub mod store;


pub use error::{CoreError, Result};
pub use models::object_id::ObjectId;
pub use models::project::Project;
pub use models::project_changes::{ProjectChanges, ProjectDraft};
pub use service::project_service::ProjectService;
pub use store::project_store::ProjectStore;
