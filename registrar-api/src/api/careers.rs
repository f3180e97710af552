//! Career endpoints
//!
//! Also serves `GET /careers/:id/courses`, the courses belonging to a career.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use registrar_common::{Career, CareerInput, Course};

use super::parse_id;
use crate::{ApiError, ApiResult, AppState};

/// GET /careers
pub async fn list_careers(State(state): State<AppState>) -> ApiResult<Json<Vec<Career>>> {
    let careers = state
        .services
        .careers
        .get_all()
        .await
        .map_err(|e| ApiError::from_service("Error fetching careers", e))?;

    Ok(Json(careers))
}

/// GET /careers/:id
pub async fn get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Career>> {
    let id = parse_id(&id)?;

    state
        .services
        .careers
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching career by ID", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Career not found".to_string()))
}

/// POST /careers
pub async fn create_career(
    State(state): State<AppState>,
    Json(input): Json<CareerInput>,
) -> ApiResult<(StatusCode, Json<Career>)> {
    let career = state
        .services
        .careers
        .insert(&input)
        .await
        .map_err(|e| ApiError::from_service("Error inserting career", e))?;

    Ok((StatusCode::CREATED, Json(career)))
}

/// PUT /careers/:id
pub async fn update_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CareerInput>,
) -> ApiResult<Json<Career>> {
    let id = parse_id(&id)?;

    let career = state
        .services
        .careers
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error updating career", e))?;

    Ok(Json(career))
}

/// DELETE /careers/:id
pub async fn delete_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .careers
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting career", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /careers/:id/courses
pub async fn list_career_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Course>>> {
    let id = parse_id(&id)?;

    let courses = state
        .services
        .careers
        .get_courses_by_career(id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching courses by career", e))?;

    Ok(Json(courses))
}

/// Build career routes
pub fn career_routes() -> Router<AppState> {
    Router::new()
        .route("/careers", get(list_careers).post(create_career))
        .route(
            "/careers/:id",
            get(get_career).put(update_career).delete(delete_career),
        )
        .route("/careers/:id/courses", get(list_career_courses))
}
