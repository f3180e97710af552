//! Course service

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::{Course, CourseInput};
use crate::{Error, Result};

#[derive(Clone)]
pub struct CourseService {
    db: SqlitePool,
}

impl CourseService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>> {
        debug!("Fetching all courses");
        sqlx::query_as::<_, Course>("SELECT id, name, description, careerId FROM course ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|e| Error::store("Error fetching courses", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Course>> {
        debug!(id, "Fetching course");
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, careerId FROM course WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching course by ID", e))
    }

    /// Insert a course; `careerId` is checked only by the schema's foreign key
    pub async fn insert(&self, input: &CourseInput) -> Result<Course> {
        let fields = input.validate()?;
        debug!(name = %fields.name, career_id = ?fields.career_id, "Inserting course");

        sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO course (name, description, careerId)
            VALUES (?, ?, ?)
            RETURNING id, name, description, careerId
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.career_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| Error::store("Error inserting course", e))
    }

    pub async fn update(&self, id: i64, input: &CourseInput) -> Result<Course> {
        let fields = input.validate()?;
        debug!(id, "Updating course");

        sqlx::query_as::<_, Course>(
            r#"
            UPDATE course SET name = ?, description = ?, careerId = ?
            WHERE id = ?
            RETURNING id, name, description, careerId
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.career_id)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error updating course", e))?
        .ok_or_else(|| Error::NotFound("Course".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "Deleting course");
        let result = sqlx::query("DELETE FROM course WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::store("Error deleting course", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Course".to_string()));
        }
        Ok(())
    }
}
