//! Term service

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::{Term, TermInput};
use crate::{Error, Result};

#[derive(Clone)]
pub struct TermService {
    db: SqlitePool,
}

impl TermService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Term>> {
        debug!("Fetching all terms");
        sqlx::query_as::<_, Term>(
            "SELECT id, title, description, startDate, endDate FROM term ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching terms", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Term>> {
        debug!(id, "Fetching term");
        sqlx::query_as::<_, Term>(
            "SELECT id, title, description, startDate, endDate FROM term WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching term by ID", e))
    }

    pub async fn insert(&self, input: &TermInput) -> Result<Term> {
        let fields = input.validate()?;
        debug!(title = %fields.title, "Inserting term");

        sqlx::query_as::<_, Term>(
            r#"
            INSERT INTO term (title, description, startDate, endDate)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, description, startDate, endDate
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .fetch_one(&self.db)
        .await
        .map_err(|e| Error::store("Error inserting term", e))
    }

    pub async fn update(&self, id: i64, input: &TermInput) -> Result<Term> {
        let fields = input.validate()?;
        debug!(id, "Updating term");

        sqlx::query_as::<_, Term>(
            r#"
            UPDATE term SET title = ?, description = ?, startDate = ?, endDate = ?
            WHERE id = ?
            RETURNING id, title, description, startDate, endDate
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error updating term", e))?
        .ok_or_else(|| Error::NotFound("Term".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "Deleting term");
        let result = sqlx::query("DELETE FROM term WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::store("Error deleting term", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Term".to_string()));
        }
        Ok(())
    }
}
