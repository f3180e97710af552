//! Professor service

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::{Professor, ProfessorInput};
use crate::{Error, Result};

#[derive(Clone)]
pub struct ProfessorService {
    db: SqlitePool,
}

impl ProfessorService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Professor>> {
        debug!("Fetching all professors");
        sqlx::query_as::<_, Professor>("SELECT id, firstName, lastName FROM professor ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|e| Error::store("Error fetching professors", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Professor>> {
        debug!(id, "Fetching professor");
        sqlx::query_as::<_, Professor>("SELECT id, firstName, lastName FROM professor WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| Error::store("Error fetching professor by ID", e))
    }

    pub async fn insert(&self, input: &ProfessorInput) -> Result<Professor> {
        let fields = input.validate()?;
        debug!(first_name = %fields.first_name, "Inserting professor");

        sqlx::query_as::<_, Professor>(
            r#"
            INSERT INTO professor (firstName, lastName)
            VALUES (?, ?)
            RETURNING id, firstName, lastName
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| Error::store("Error inserting professor", e))
    }

    pub async fn update(&self, id: i64, input: &ProfessorInput) -> Result<Professor> {
        let fields = input.validate()?;
        debug!(id, "Updating professor");

        sqlx::query_as::<_, Professor>(
            r#"
            UPDATE professor SET firstName = ?, lastName = ?
            WHERE id = ?
            RETURNING id, firstName, lastName
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error updating professor", e))?
        .ok_or_else(|| Error::NotFound("Professor".to_string()))
    }

    /// Delete a professor; their events go with them (ON DELETE CASCADE)
    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(id, "Deleting professor");
        let result = sqlx::query("DELETE FROM professor WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::store("Error deleting professor", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Professor".to_string()));
        }
        Ok(())
    }
}
