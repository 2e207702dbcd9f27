use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

const PROJECTS_PATH: &str = "/api/projects";

#[derive(Serialize)]
struct ProjectBody<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// HTTP client for the prj-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// URL of the projects collection, or of one project when `id` is given.
    ///
    /// The id is pushed as a single escaped path segment.
    pub fn projects_url(&self, id: Option<&str>) -> CliClientResult<Url> {
        let collection = format!("{}{}", self.base_url, PROJECTS_PATH);
        let mut url = Url::parse(&collection)
            .map_err(|e| ClientError::invalid_url(&collection, e.to_string()))?;

        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| ClientError::invalid_url(&collection, "cannot be a base".into()))?
                .push(id);
        }

        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        id: Option<&str>,
    ) -> CliClientResult<reqwest::RequestBuilder> {
        Ok(self.client.request(method, self.projects_url(id)?))
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Error bodies that are not the uniform JSON shape keep their raw text
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                if text.is_empty() {
                    status.to_string()
                } else {
                    text.clone()
                }
            });

        Err(ClientError::api_error(status.as_u16(), code, message))
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects
    pub async fn list_projects(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, None)?;
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, Some(id))?;
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> CliClientResult<Value> {
        let body = ProjectBody { title, description };
        let req = self.request(Method::POST, None)?.json(&body);
        self.execute(req).await
    }

    /// Update a project. A `None` description leaves the stored one as is.
    pub async fn update_project(
        &self,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> CliClientResult<Value> {
        let body = ProjectBody { title, description };
        let req = self.request(Method::PUT, Some(id))?.json(&body);
        self.execute(req).await
    }

    /// Delete a project, returning its prior state
    pub async fn delete_project(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, Some(id))?;
        self.execute(req).await
    }
}
