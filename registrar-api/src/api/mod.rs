//! HTTP API handlers for registrar-api

pub mod careers;
pub mod courses;
pub mod health;
pub mod professor_events;
pub mod professors;
pub mod terms;

pub use careers::career_routes;
pub use courses::course_routes;
pub use health::health_routes;
pub use professor_events::professor_event_routes;
pub use professors::professor_routes;
pub use terms::term_routes;

use crate::{ApiError, ApiResult};

/// Parse an id path segment; anything but an integer is a 400
pub(crate) fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.trim().parse().map_err(|_| ApiError::invalid_id())
}
