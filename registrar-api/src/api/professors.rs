//! Professor endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use registrar_common::{Professor, ProfessorInput};

use super::parse_id;
use crate::{ApiError, ApiResult, AppState};

/// GET /professors
pub async fn list_professors(State(state): State<AppState>) -> ApiResult<Json<Vec<Professor>>> {
    let professors = state
        .services
        .professors
        .get_all()
        .await
        .map_err(|e| ApiError::from_service("Error fetching professors", e))?;

    Ok(Json(professors))
}

/// GET /professors/:id
pub async fn get_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Professor>> {
    let id = parse_id(&id)?;

    state
        .services
        .professors
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching professor by ID", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Professor not found".to_string()))
}

/// POST /professors
pub async fn create_professor(
    State(state): State<AppState>,
    Json(input): Json<ProfessorInput>,
) -> ApiResult<(StatusCode, Json<Professor>)> {
    let professor = state
        .services
        .professors
        .insert(&input)
        .await
        .map_err(|e| ApiError::from_service("Error inserting professor", e))?;

    Ok((StatusCode::CREATED, Json(professor)))
}

/// PUT /professors/:id
pub async fn update_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ProfessorInput>,
) -> ApiResult<Json<Professor>> {
    let id = parse_id(&id)?;

    let professor = state
        .services
        .professors
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error updating professor", e))?;

    Ok(Json(professor))
}

/// DELETE /professors/:id
pub async fn delete_professor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .professors
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting professor", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build professor routes
pub fn professor_routes() -> Router<AppState> {
    Router::new()
        .route("/professors", get(list_professors).post(create_professor))
        .route(
            "/professors/:id",
            get(get_professor)
                .put(update_professor)
                .delete(delete_professor),
        )
}
