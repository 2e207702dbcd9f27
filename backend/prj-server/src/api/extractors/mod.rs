pub mod project_body;
