//! Term endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use registrar_common::{Term, TermInput};

use super::parse_id;
use crate::{ApiError, ApiResult, AppState};

/// GET /terms
pub async fn list_terms(State(state): State<AppState>) -> ApiResult<Json<Vec<Term>>> {
    let terms = state
        .services
        .terms
        .get_all()
        .await
        .map_err(|e| ApiError::from_service("Error fetching terms", e))?;

    Ok(Json(terms))
}

/// GET /terms/:id
pub async fn get_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Term>> {
    let id = parse_id(&id)?;

    state
        .services
        .terms
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching term by ID", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Term not found".to_string()))
}

/// POST /terms
pub async fn create_term(
    State(state): State<AppState>,
    Json(input): Json<TermInput>,
) -> ApiResult<(StatusCode, Json<Term>)> {
    let term = state
        .services
        .terms
        .insert(&input)
        .await
        .map_err(|e| ApiError::from_service("Error inserting term", e))?;

    Ok((StatusCode::CREATED, Json(term)))
}

/// PUT /terms/:id
pub async fn update_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TermInput>,
) -> ApiResult<Json<Term>> {
    let id = parse_id(&id)?;

    let term = state
        .services
        .terms
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error updating term", e))?;

    Ok(Json(term))
}

/// DELETE /terms/:id
pub async fn delete_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .terms
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting term", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build term routes
pub fn term_routes() -> Router<AppState> {
    Router::new()
        .route("/terms", get(list_terms).post(create_term))
        .route(
            "/terms/:id",
            get(get_term).put(update_term).delete(delete_term),
        )
}
