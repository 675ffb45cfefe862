//! Reservation Model

use super::serde_helpers;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Reservation entity
///
/// Holds a one-directional link to its dining table; the set of
/// reservations on a table is always a derived query, never a stored
/// back-pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Party size (guests), at least 1
    pub party_size: i32,
    /// Holder name
    pub name: String,
    /// Start of the booking window, offset preserved as sent by the client
    pub start_time: DateTime<FixedOffset>,
    /// Record link to dining_table
    #[serde(with = "serde_helpers::record_id")]
    pub reserved_table: RecordId,
}

/// Create/update reservation payload
///
/// The same shape serves both operations; the reservation id is always
/// generated server-side and never part of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub party_size: i32,
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    /// Target table id, bare key or "dining_table:key"
    pub table_id: String,
}
