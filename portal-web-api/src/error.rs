use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("This email is already registered. Please login or use a different email.")]
    DuplicateEmail,

    #[error("A college with this contact email already exists.")]
    DuplicateCollegeEmail,

    #[error("A college with this name already exists.")]
    DuplicateCollegeName,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl PortalError {
    /// Persistence failures are the only errors the user cannot fix by
    /// resubmitting different input.
    pub fn is_internal(&self) -> bool {
        matches!(self, PortalError::Database(_))
    }
}
