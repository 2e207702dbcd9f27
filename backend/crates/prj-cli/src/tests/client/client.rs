use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_api_error_display_includes_code_and_status() {
    let err = ClientError::api_error(404, "NOT_FOUND".into(), "Project not found".into());

    let text = err.to_string();
    assert!(text.contains("NOT_FOUND"));
    assert!(text.contains("404"));
    assert!(text.contains("Project not found"));
}

#[test]
fn test_projects_url_without_id_is_collection() {
    let client = Client::new("http://localhost:8000/");

    let url = client.projects_url(None).unwrap();

    assert_eq!(url.as_str(), "http://localhost:8000/api/projects");
}

#[test]
fn test_projects_url_escapes_id_as_single_segment() {
    let client = Client::new("http://localhost:8000");

    let slash = client.projects_url(Some("a/b")).unwrap();
    let query = client.projects_url(Some("x?y")).unwrap();

    assert_eq!(slash.path(), "/api/projects/a%2Fb");
    assert!(slash.query().is_none());
    assert_eq!(query.path(), "/api/projects/x%3Fy");
    assert!(query.query().is_none());
}

#[test]
fn test_projects_url_rejects_unparseable_base() {
    let client = Client::new("not a url");

    let result = client.projects_url(None);

    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}
