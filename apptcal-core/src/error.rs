//! Error types for apptcal.

use thiserror::Error;

use crate::appointment::AppointmentId;

/// Errors that can occur in apptcal operations.
///
/// `PastDate` and `InvertedRange` are user-correctable and their messages are
/// shown verbatim as notifications.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Cannot book appointments in the past!")]
    PastDate,

    #[error("End date cannot be before start date!")]
    InvertedRange,

    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedulerError {
    /// Whether the user can fix this by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, SchedulerError::PastDate | SchedulerError::InvertedRange)
    }
}

/// Result type alias for apptcal operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
