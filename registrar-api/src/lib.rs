//! registrar-api library - REST API over the academic records store
//!
//! Routes:
//! - `/careers`, `/courses`, `/professors`, `/terms` with `/:id` item routes
//! - `/careers/:id/courses` for the career -> courses relationship
//! - `/events/:professorId[/:eventId]` for events nested under a professor
//! - `/health`

use axum::Router;
use registrar_common::Services;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Entity services, all over the same connection pool
    pub services: Services,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            services: Services::new(db),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::career_routes())
        .merge(api::course_routes())
        .merge(api::professor_routes())
        .merge(api::professor_event_routes())
        .merge(api::term_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
