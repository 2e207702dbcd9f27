use crate::{CreateProjectRequest, ProjectDto, UpdateProjectRequest};

use prj_core::{Project, ProjectDraft};

#[test]
fn test_create_request_ignores_unknown_fields() {
    let req: CreateProjectRequest = serde_json::from_str(
        r#"{"title": "Demo", "description": "d", "id": "x", "created_at": 5}"#,
    )
    .unwrap();

    let draft: ProjectDraft = req.into();

    assert_eq!(draft.title.as_deref(), Some("Demo"));
    assert_eq!(draft.description.as_deref(), Some("d"));
}

#[test]
fn test_create_request_empty_object_has_no_title() {
    let req: CreateProjectRequest = serde_json::from_str("{}").unwrap();

    let draft: ProjectDraft = req.into();

    assert!(draft.title.is_none());
    assert!(draft.description.is_none());
}

#[test]
fn test_update_request_null_description_is_absent() {
    let req: UpdateProjectRequest =
        serde_json::from_str(r#"{"title": "New", "description": null}"#).unwrap();

    let draft: ProjectDraft = req.into();

    assert!(draft.description.is_none());
}

#[test]
fn test_project_dto_from_project() {
    let changes = ProjectDraft::new("Demo")
        .with_description("Described")
        .validate()
        .unwrap();
    let project = Project::new(&changes);

    let dto = ProjectDto::from(project.clone());

    assert_eq!(dto.id, project.id.to_string());
    assert_eq!(dto.id.len(), 24);
    assert_eq!(dto.title, "Demo");
    assert_eq!(dto.description.as_deref(), Some("Described"));
    assert_eq!(dto.created_at, project.created_at.timestamp());
    assert_eq!(dto.updated_at, dto.created_at);
}

#[test]
fn test_falsy_titles_count_as_missing() {
    for body in [
        r#"{"title": false}"#,
        r#"{"title": 0}"#,
        r#"{"title": null}"#,
        r#"{"title": ["x"]}"#,
        r#"{"title": {"x": 1}}"#,
    ] {
        let req: CreateProjectRequest = serde_json::from_str(body).unwrap();

        let draft: ProjectDraft = req.into();

        assert!(draft.title.is_none(), "title should be missing for {}", body);
        assert!(draft.validate().is_err());
    }
}

#[test]
fn test_empty_string_title_rejected_by_validation() {
    let req: UpdateProjectRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();

    let draft: ProjectDraft = req.into();

    assert_eq!(draft.title.as_deref(), Some(""));
    assert!(draft.validate().is_err());
}

#[test]
fn test_truthy_scalar_title_becomes_text() {
    let req: CreateProjectRequest =
        serde_json::from_str(r#"{"title": 42, "description": true}"#).unwrap();

    let draft: ProjectDraft = req.into();

    assert_eq!(draft.title.as_deref(), Some("42"));
    assert_eq!(draft.description.as_deref(), Some("true"));
}
