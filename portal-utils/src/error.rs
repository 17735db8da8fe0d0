use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("No college with contact email {0}")]
    CollegeNotFound(String),

    #[error("No student with email {0}")]
    StudentNotFound(String),

    #[error("Course {0} does not belong to college {1}")]
    CourseMismatch(i32, String),

    #[error("Eligibility marks must be between 0 and 100, got {0}")]
    MarksOutOfRange(f64),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
