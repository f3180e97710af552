//! Professor event endpoints, nested under the owning professor
//!
//! `/events/:professorId` lists and creates; `/events/:professorId/:eventId`
//! reads, replaces and deletes. An event id under the wrong professor is a 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use registrar_common::{ProfessorEvent, ProfessorEventInput};

use super::parse_id;
use crate::{ApiError, ApiResult, AppState};

/// GET /events
pub async fn list_all_events(State(state): State<AppState>) -> ApiResult<Json<Vec<ProfessorEvent>>> {
    let events = state
        .services
        .professor_events
        .get_all()
        .await
        .map_err(|e| ApiError::from_service("Error fetching professor events", e))?;

    Ok(Json(events))
}

/// GET /events/:professorId
pub async fn list_professor_events(
    State(state): State<AppState>,
    Path(professor_id): Path<String>,
) -> ApiResult<Json<Vec<ProfessorEvent>>> {
    let professor_id = parse_id(&professor_id)?;

    let events = state
        .services
        .professor_events
        .get_all_by_professor_id(professor_id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching professor events", e))?;

    Ok(Json(events))
}

/// GET /events/:professorId/:eventId
pub async fn get_professor_event(
    State(state): State<AppState>,
    Path((professor_id, event_id)): Path<(String, String)>,
) -> ApiResult<Json<ProfessorEvent>> {
    let professor_id = parse_id(&professor_id)?;
    let event_id = parse_id(&event_id)?;

    state
        .services
        .professor_events
        .get_by_professor_id(professor_id, event_id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching professor event", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Professor event not found".to_string()))
}

/// POST /events/:professorId
pub async fn create_professor_event(
    State(state): State<AppState>,
    Path(professor_id): Path<String>,
    Json(input): Json<ProfessorEventInput>,
) -> ApiResult<(StatusCode, Json<ProfessorEvent>)> {
    let professor_id = parse_id(&professor_id)?;

    let event = state
        .services
        .professor_events
        .insert_by_professor_id(professor_id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error inserting professor event", e))?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /events/:professorId/:eventId
pub async fn update_professor_event(
    State(state): State<AppState>,
    Path((professor_id, event_id)): Path<(String, String)>,
    Json(input): Json<ProfessorEventInput>,
) -> ApiResult<Json<ProfessorEvent>> {
    let professor_id = parse_id(&professor_id)?;
    let event_id = parse_id(&event_id)?;

    let event = state
        .services
        .professor_events
        .update_by_professor_id(professor_id, event_id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error updating professor event", e))?;

    Ok(Json(event))
}

/// DELETE /events/:professorId/:eventId
pub async fn delete_professor_event(
    State(state): State<AppState>,
    Path((professor_id, event_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let professor_id = parse_id(&professor_id)?;
    let event_id = parse_id(&event_id)?;

    state
        .services
        .professor_events
        .delete_by_professor_id(professor_id, event_id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting professor event", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build professor event routes
pub fn professor_event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_all_events))
        .route(
            "/events/:professor_id",
            get(list_professor_events).post(create_professor_event),
        )
        .route(
            "/events/:professor_id/:event_id",
            get(get_professor_event)
                .put(update_professor_event)
                .delete(delete_professor_event),
        )
}
