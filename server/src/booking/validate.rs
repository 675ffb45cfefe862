//! Reservation input validation
//!
//! Fail-fast: checks run in a fixed order and the first failure is the
//! reported reason. The table existence check is performed by the engine
//! (the only read it needs) and passed in, keeping this a pure function.

use super::error::ValidationErrorKind;
use crate::db::models::ReservationCreate;
use chrono::{DateTime, Utc};

/// Validate a reservation payload.
///
/// Check order (first failure wins):
/// 1. party size >= 1
/// 2. target table exists
/// 3. holder name non-blank after trimming
/// 4. start instant not before `now`
pub fn validate(
    input: &ReservationCreate,
    table_exists: bool,
    now: DateTime<Utc>,
) -> Result<(), ValidationErrorKind> {
    if input.party_size < 1 {
        return Err(ValidationErrorKind::InvalidPartySize);
    }

    if !table_exists {
        return Err(ValidationErrorKind::UnknownTable);
    }

    if input.name.trim().is_empty() {
        return Err(ValidationErrorKind::BlankName);
    }

    if input.start_time.with_timezone(&Utc) < now {
        return Err(ValidationErrorKind::PastDateTime);
    }

    Ok(())
}
