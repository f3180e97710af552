//! # Registrar Common Library
//!
//! Shared code for the registrar API server and console client:
//! - Entity models and their request payloads
//! - Database initialization and schema
//! - Per-entity services over the SQLite store
//! - Configuration resolution
//! - Date parsing helpers

pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod time;

pub use db::models::{
    Career, CareerInput, Course, CourseInput, Professor, ProfessorEvent, ProfessorEventInput,
    ProfessorInput, Term, TermInput,
};
pub use error::{Error, Result};
pub use services::Services;
