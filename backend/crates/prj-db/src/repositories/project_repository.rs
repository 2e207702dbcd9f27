//! SQLite-backed project store.
//!
//! Each operation is a single statement. Updates and deletes use
//! `RETURNING`, so the find-and-modify primitives are atomic without a
//! surrounding transaction.

use crate::{DbError, Result as DbErrorResult};

use prj_core::{
    ObjectId, Project, ProjectChanges, ProjectStore, Result as CoreErrorResult,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const PROJECT_COLUMNS: &str = "id, title, description, created_at, updated_at";

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    /// Insert a new project. A colliding id leaves the table untouched and
    /// yields `None`.
    pub async fn create(&self, changes: &ProjectChanges) -> DbErrorResult<Option<Project>> {
        let project = Project::new(changes);

        let row = sqlx::query(&format!(
            r#"
                INSERT INTO projects (id, title, description, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(id) DO NOTHING
                RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(project.id.to_string())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn find_by_id(&self, id: ObjectId) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    /// Title is always replaced; description only when supplied.
    pub async fn find_by_id_and_update(
        &self,
        id: ObjectId,
        changes: &ProjectChanges,
    ) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            r#"
                UPDATE projects
                SET title = ?, description = COALESCE(?, description), updated_at = ?
                WHERE id = ?
                RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn find_by_id_and_delete(&self, id: ObjectId) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "DELETE FROM projects WHERE id = ? RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn find_all(&self) -> CoreErrorResult<Vec<Project>> {
        Ok(ProjectRepository::find_all(self).await?)
    }

    async fn create(&self, changes: &ProjectChanges) -> CoreErrorResult<Option<Project>> {
        Ok(ProjectRepository::create(self, changes).await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> CoreErrorResult<Option<Project>> {
        Ok(ProjectRepository::find_by_id(self, id).await?)
    }

    async fn find_by_id_and_update(
        &self,
        id: ObjectId,
        changes: &ProjectChanges,
    ) -> CoreErrorResult<Option<Project>> {
        Ok(ProjectRepository::find_by_id_and_update(self, id, changes).await?)
    }

    async fn find_by_id_and_delete(&self, id: ObjectId) -> CoreErrorResult<Option<Project>> {
        Ok(ProjectRepository::find_by_id_and_delete(self, id).await?)
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Project {
        id: ObjectId::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid id in projects.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

#[track_caller]
fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::CorruptRow {
        message: format!("Invalid timestamp in projects.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
