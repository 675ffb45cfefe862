//! Booking engine errors

use crate::db::repository::RepoError;
use crate::utils::AppError;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// Reason a reservation payload was rejected, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("reservation must have at least 1 person")]
    InvalidPartySize,

    #[error("table with given ID does not exist")]
    UnknownTable,

    #[error("name cannot be blank")]
    BlankName,

    #[error("reservation time cannot be before the present")]
    PastDateTime,
}

/// Booking engine errors
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(ValidationErrorKind),

    #[error("table {table_id} is already booked at {start_time}")]
    Conflict {
        table_id: String,
        start_time: DateTime<FixedOffset>,
    },

    #[error("reservation not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(kind) => AppError::Validation(kind.to_string()),
            BookingError::Conflict { .. } => AppError::Conflict(err.to_string()),
            BookingError::NotFound(id) => {
                AppError::NotFound(format!("Reservation {} not found", id))
            }
            BookingError::Repo(e) => AppError::Database(e.to_string()),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
