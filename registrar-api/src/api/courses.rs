//! Course endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use registrar_common::{Course, CourseInput};

use super::parse_id;
use crate::{ApiError, ApiResult, AppState};

/// GET /courses
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<Vec<Course>>> {
    let courses = state
        .services
        .courses
        .get_all()
        .await
        .map_err(|e| ApiError::from_service("Error fetching courses", e))?;

    Ok(Json(courses))
}

/// GET /courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(&id)?;

    state
        .services
        .courses
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_service("Error fetching course by ID", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))
}

/// POST /courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(input): Json<CourseInput>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    let course = state
        .services
        .courses
        .insert(&input)
        .await
        .map_err(|e| ApiError::from_service("Error inserting course", e))?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /courses/:id
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CourseInput>,
) -> ApiResult<Json<Course>> {
    let id = parse_id(&id)?;

    let course = state
        .services
        .courses
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_service("Error updating course", e))?;

    Ok(Json(course))
}

/// DELETE /courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    state
        .services
        .courses
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service("Error deleting course", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
}
