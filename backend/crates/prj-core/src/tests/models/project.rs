use crate::{Project, ProjectDraft};

#[test]
fn test_project_new_copies_fields_and_assigns_id() {
    let changes = ProjectDraft::new("Demo")
        .with_description("first")
        .validate()
        .unwrap();
    let project = Project::new(&changes);

    assert_eq!(project.title, "Demo");
    assert_eq!(project.description.as_deref(), Some("first"));
    assert_eq!(project.created_at, project.updated_at);
    assert!(project.id.timestamp().is_some());
}

#[test]
fn test_apply_replaces_title_and_keeps_description_when_absent() {
    let created = ProjectDraft::new("Demo")
        .with_description("keep me")
        .validate()
        .unwrap();
    let mut project = Project::new(&created);
    let id = project.id;

    let update = ProjectDraft::new("Renamed").validate().unwrap();
    project.apply(&update);

    assert_eq!(project.id, id);
    assert_eq!(project.title, "Renamed");
    assert_eq!(project.description.as_deref(), Some("keep me"));
    assert!(project.updated_at >= project.created_at);
}

#[test]
fn test_apply_replaces_description_when_supplied() {
    let mut project = Project::new(&ProjectDraft::new("Demo").validate().unwrap());

    let update = ProjectDraft::new("Demo")
        .with_description("now described")
        .validate()
        .unwrap();
    project.apply(&update);

    assert_eq!(project.description.as_deref(), Some("now described"));
}
