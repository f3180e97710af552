//! Date parsing utilities
//!
//! Event and term dates arrive either as plain calendar dates (`YYYY-MM-DD`,
//! as typed at the console) or as RFC 3339 timestamps. Both are stored and
//! emitted as UTC timestamps.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{Error, Result};

/// Parse a calendar date or RFC 3339 timestamp into UTC
///
/// Calendar dates resolve to midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a required date field, producing the field's validation message
///
/// `label` is the human name of the field ("Start Date", "End Date").
pub fn require_date(value: Option<&str>, label: &str) -> Result<DateTime<Utc>> {
    let raw = value.ok_or_else(|| Error::Validation(format!("{} must not be null", label)))?;
    parse_date(raw).ok_or_else(|| Error::Validation(format!("{} must be a valid date", label)))
}
