mod project_body;
