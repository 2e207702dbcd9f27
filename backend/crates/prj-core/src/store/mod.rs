pub mod project_store;
