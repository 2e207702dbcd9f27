#![allow(dead_code)]

//! Test infrastructure for prj-server API tests

use prj_config::ApiConfig;
use prj_core::{ObjectId, Project, ProjectChanges, ProjectStore, Result as CoreErrorResult};
use prj_db::ProjectRepository;
use prj_server::AppState;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // One connection: every connection to :memory: is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    prj_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, ApiConfig::default())
}

/// AppState whose store counts every call that reaches it
pub async fn create_recording_app_state(api_config: ApiConfig) -> (AppState, Arc<RecordingStore>) {
    let pool = create_test_pool().await;
    let store = Arc::new(RecordingStore::new(ProjectRepository::new(pool.clone())));
    let state = AppState::with_store(pool, store.clone(), api_config);
    (state, store)
}

/// Insert a project directly through the repository
pub async fn create_test_project(pool: &SqlitePool, title: &str) -> Project {
    let changes = ProjectChanges {
        title: title.to_string(),
        description: Some("A test project".to_string()),
    };

    ProjectRepository::new(pool.clone())
        .create(&changes)
        .await
        .expect("Failed to create test project")
        .expect("Test project not returned")
}

/// Send a request through the router and decode the JSON body (Null when empty)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Send a raw body with a JSON content type and decode the JSON response
pub async fn send_raw_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &'static str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Store decorator that counts calls before delegating
pub struct RecordingStore {
    inner: ProjectRepository,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new(inner: ProjectRepository) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProjectStore for RecordingStore {
    async fn find_all(&self) -> CoreErrorResult<Vec<Project>> {
        self.record();
        ProjectStore::find_all(&self.inner).await
    }

    async fn create(&self, changes: &ProjectChanges) -> CoreErrorResult<Option<Project>> {
        self.record();
        ProjectStore::create(&self.inner, changes).await
    }

    async fn find_by_id(&self, id: ObjectId) -> CoreErrorResult<Option<Project>> {
        self.record();
        ProjectStore::find_by_id(&self.inner, id).await
    }

    async fn find_by_id_and_update(
        &self,
        id: ObjectId,
        changes: &ProjectChanges,
    ) -> CoreErrorResult<Option<Project>> {
        self.record();
        ProjectStore::find_by_id_and_update(&self.inner, id, changes).await
    }

    async fn find_by_id_and_delete(&self, id: ObjectId) -> CoreErrorResult<Option<Project>> {
        self.record();
        ProjectStore::find_by_id_and_delete(&self.inner, id).await
    }
}
