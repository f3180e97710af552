//! Entity services
//!
//! One service per entity, each holding its own handle to the store. Every
//! operation is a single statement; store failures are wrapped with the
//! operation that failed, zero-row updates and deletes surface as
//! [`Error::NotFound`](crate::Error::NotFound), and required-field checks run
//! before any statement is issued.

mod career;
mod course;
mod professor;
mod professor_event;
mod term;

pub use career::CareerService;
pub use course::CourseService;
pub use professor::ProfessorService;
pub use professor_event::ProfessorEventService;
pub use term::TermService;

use sqlx::SqlitePool;

/// All entity services over one store
#[derive(Clone)]
pub struct Services {
    pub careers: CareerService,
    pub courses: CourseService,
    pub professors: ProfessorService,
    pub professor_events: ProfessorEventService,
    pub terms: TermService,
}

impl Services {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            careers: CareerService::new(db.clone()),
            courses: CourseService::new(db.clone()),
            professors: ProfessorService::new(db.clone()),
            professor_events: ProfessorEventService::new(db.clone()),
            terms: TermService::new(db),
        }
    }
}
