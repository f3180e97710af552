//! Career service, including the career -> courses relationship query

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::{Career, CareerInput, Course};
use crate::{Error, Result};

#[derive(Clone)]
pub struct CareerService {
    db: SqlitePool,
}

impl CareerService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All careers in creation order
    pub async fn get_all(&self) -> Result<Vec<Career>> {
        debug!("Fetching all careers");
        sqlx::query_as::<_, Career>("SELECT id, name, description FROM career ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|e| Error::store("Error fetching careers", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Career>> {
        debug!(id, "Fetching career");
        sqlx::query_as::<_, Career>("SELECT id, name, description FROM career WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| Error::store("Error fetching career by ID", e))
    }

    pub async fn insert(&self, input: &CareerInput) -> Result<Career> {
        let fields = input.validate()?;
        debug!(name = %fields.name, "Inserting career");

        sqlx::query_as::<_, Career>(
            r#"
            INSERT INTO career (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| Error::store("Error inserting career", e))
    }

    /// Replace name and description of an existing career
    pub async fn update(&self, id: i64, input: &CareerInput) -> Result<Career> {
        let fields = input.validate()?;
        debug!(id, "Updating career");

        sqlx::query_as::<_, Career>(
            r#"
            UPDATE career SET name = ?, description = ?
            WHERE id = ?
            RETURNING id, name, description
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error updating career", e))?
        .ok_or_else(|| Error::NotFound("Career".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "Deleting career");
        let result = sqlx::query("DELETE FROM career WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::store("Error deleting career", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Career".to_string()));
        }
        Ok(())
    }

    /// Courses attached to a career, in creation order
    ///
    /// An unknown career simply has no courses.
    pub async fn get_courses_by_career(&self, career_id: i64) -> Result<Vec<Course>> {
        debug!(career_id, "Fetching courses by career");
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, careerId FROM course WHERE careerId = ? ORDER BY id",
        )
        .bind(career_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching courses by career", e))
    }
}
