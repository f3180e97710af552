//! Database models
//!
//! Each entity has a row type (what the store returns and the API emits) and
//! an input type (what the API accepts). Input fields are optional so that a
//! missing required field reaches validation instead of failing
//! deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::time::require_date;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Career {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub career_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct ProfessorEvent {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub professor_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Term {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

// ========================================
// Request payloads
// ========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub career_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// ========================================
// Validated fields
// ========================================

/// Career fields after validation, ready to bind
#[derive(Debug, Clone, PartialEq)]
pub struct CareerFields {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseFields {
    pub name: String,
    pub description: String,
    pub career_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorFields {
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Shared by professor events and terms
#[derive(Debug, Clone, PartialEq)]
pub struct DatedFields {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Required text: present and not blank; kept exactly as given
fn require_text(value: Option<&str>, label: &str) -> Result<String> {
    match value {
        None => Err(Error::Validation(format!("{} must not be null", label))),
        Some(text) if text.trim().is_empty() => {
            Err(Error::Validation(format!("{} must not be empty", label)))
        }
        Some(text) => Ok(text.to_string()),
    }
}

fn validate_dated(
    title: Option<&str>,
    description: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<DatedFields> {
    Ok(DatedFields {
        title: require_text(title, "Title")?,
        description: description.unwrap_or_default().to_string(),
        start_date: require_date(start_date, "Start Date")?,
        end_date: require_date(end_date, "End Date")?,
    })
}

impl CareerInput {
    pub fn validate(&self) -> Result<CareerFields> {
        Ok(CareerFields {
            name: require_text(self.name.as_deref(), "Name")?,
            description: self.description.clone().unwrap_or_default(),
        })
    }
}

impl CourseInput {
    pub fn validate(&self) -> Result<CourseFields> {
        Ok(CourseFields {
            name: require_text(self.name.as_deref(), "Name")?,
            description: self.description.clone().unwrap_or_default(),
            career_id: self.career_id,
        })
    }
}

impl ProfessorInput {
    pub fn validate(&self) -> Result<ProfessorFields> {
        Ok(ProfessorFields {
            first_name: require_text(self.first_name.as_deref(), "First name")?,
            last_name: self.last_name.clone(),
        })
    }
}

impl ProfessorEventInput {
    pub fn validate(&self) -> Result<DatedFields> {
        validate_dated(
            self.title.as_deref(),
            self.description.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }
}

impl TermInput {
    pub fn validate(&self) -> Result<DatedFields> {
        validate_dated(
            self.title.as_deref(),
            self.description.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }
}
