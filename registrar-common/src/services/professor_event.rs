//! Professor event service
//!
//! Events are addressed through their professor: point lookups, updates and
//! deletes match on both `professorId` and the event id, so an event is
//! invisible under any other professor.

use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::{ProfessorEvent, ProfessorEventInput};
use crate::{Error, Result};

const EVENT_COLUMNS: &str = "id, title, description, startDate, endDate, professorId";

#[derive(Clone)]
pub struct ProfessorEventService {
    db: SqlitePool,
}

impl ProfessorEventService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Every event of every professor, in creation order
    pub async fn get_all(&self) -> Result<Vec<ProfessorEvent>> {
        debug!("Fetching all professor events");
        sqlx::query_as::<_, ProfessorEvent>(&format!(
            "SELECT {EVENT_COLUMNS} FROM professor_event ORDER BY id"
        ))
        .fetch_all(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching professor events", e))
    }

    /// Events of one professor; empty when the professor has none or does not exist
    pub async fn get_all_by_professor_id(&self, professor_id: i64) -> Result<Vec<ProfessorEvent>> {
        debug!(professor_id, "Fetching professor events");
        sqlx::query_as::<_, ProfessorEvent>(&format!(
            "SELECT {EVENT_COLUMNS} FROM professor_event WHERE professorId = ? ORDER BY id"
        ))
        .bind(professor_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching professor events", e))
    }

    pub async fn get_by_professor_id(
        &self,
        professor_id: i64,
        event_id: i64,
    ) -> Result<Option<ProfessorEvent>> {
        debug!(professor_id, event_id, "Fetching professor event");
        sqlx::query_as::<_, ProfessorEvent>(&format!(
            "SELECT {EVENT_COLUMNS} FROM professor_event WHERE professorId = ? AND id = ?"
        ))
        .bind(professor_id)
        .bind(event_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error fetching professor event", e))
    }

    /// Insert an event for a professor; an unknown professor fails the foreign key
    pub async fn insert_by_professor_id(
        &self,
        professor_id: i64,
        input: &ProfessorEventInput,
    ) -> Result<ProfessorEvent> {
        let fields = input.validate()?;
        debug!(professor_id, title = %fields.title, "Inserting professor event");

        sqlx::query_as::<_, ProfessorEvent>(&format!(
            r#"
            INSERT INTO professor_event (title, description, startDate, endDate, professorId)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(professor_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| Error::store("Error inserting professor event", e))
    }

    pub async fn update_by_professor_id(
        &self,
        professor_id: i64,
        event_id: i64,
        input: &ProfessorEventInput,
    ) -> Result<ProfessorEvent> {
        let fields = input.validate()?;
        debug!(professor_id, event_id, "Updating professor event");

        sqlx::query_as::<_, ProfessorEvent>(&format!(
            r#"
            UPDATE professor_event
            SET title = ?, description = ?, startDate = ?, endDate = ?
            WHERE professorId = ? AND id = ?
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(professor_id)
        .bind(event_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| Error::store("Error updating professor event", e))?
        .ok_or_else(|| Error::NotFound("Professor event".to_string()))
    }

    pub async fn delete_by_professor_id(&self, professor_id: i64, event_id: i64) -> Result<()> {
        debug!(professor_id, event_id, "Deleting professor event");
        let result = sqlx::query("DELETE FROM professor_event WHERE professorId = ? AND id = ?")
            .bind(professor_id)
            .bind(event_id)
            .execute(&self.db)
            .await
            .map_err(|e| Error::store("Error deleting professor event", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("Professor event".to_string()));
        }
        Ok(())
    }
}
