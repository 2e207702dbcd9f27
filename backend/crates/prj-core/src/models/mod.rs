pub mod object_id;
pub mod project;
pub mod project_changes;
