//! BookingManager - reservation lifecycle and the no-overlap invariant
//!
//! This module is the single authority over reservation state. Every
//! reservation claims a fixed-length half-open window on one dining
//! table, and no two reservations may ever claim overlapping time on
//! the same table.
//!
//! # Booking Flow
//!
//! ```text
//! create(input)
//!     ├─ 1. Acquire the target table's write lock
//!     ├─ 2. Table existence check (read-only)
//!     ├─ 3. Validate payload (fail-fast, fixed check order)
//!     ├─ 4. Overlap scan over the table's reservations
//!     ├─ 5. Generate reservation id (UUID v4)
//!     ├─ 6. Persist
//!     └─ 7. Return stored record
//! ```
//!
//! The lock is held across steps 2-6: the overlap-scan-then-write
//! sequence is a check-then-act race without it, and two concurrent
//! creates for the same table could both pass the scan before either
//! persists. Operations on different tables proceed independently.

mod error;
mod overlap;
mod validate;


pub use error::{BookingError, BookingResult, ValidationErrorKind};
pub use overlap::overlaps;
pub use validate::validate;

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use dashmap::DashMap;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::models::{Reservation, ReservationCreate};
use crate::db::repository::{
    DiningTableRepository, RepoError, ReservationRepository, strip_table,
};

const DINING_TABLE: &str = "dining_table";

/// Reservation engine
///
/// Owns the booking invariant end-to-end. The window length is injected
/// at construction (identical for every reservation) and the per-table
/// lock registry serializes writes on each table.
pub struct BookingManager {
    reservations: ReservationRepository,
    tables: DiningTableRepository,
    /// Fixed booking window length
    duration: Duration,
    /// Per-table write locks guarding the scan-then-write sequence
    table_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl std::fmt::Debug for BookingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingManager")
            .field("duration", &self.duration)
            .field("locked_tables", &self.table_locks.len())
            .finish()
    }
}

impl BookingManager {
    /// Create a new BookingManager over the given database
    pub fn new(db: Surreal<Db>, duration_hours: i64) -> Self {
        Self {
            reservations: ReservationRepository::new(db.clone()),
            tables: DiningTableRepository::new(db),
            duration: Duration::hours(duration_hours),
            table_locks: DashMap::new(),
        }
    }

    /// The fixed booking window length
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// 获取指定桌台的写锁 (不存在时创建)
    fn lock_for(&self, table_key: &str) -> Arc<Mutex<()>> {
        self.table_locks
            .entry(table_key.to_string())
            .or_default()
            .clone()
    }

    /// Scan the table's reservations for a window conflict.
    ///
    /// `exclude` removes one reservation from the comparison set: an
    /// update must not conflict with its own prior window.
    async fn check_no_overlap(
        &self,
        table: &RecordId,
        start_time: DateTime<FixedOffset>,
        exclude: Option<&RecordId>,
    ) -> BookingResult<()> {
        let existing = self.reservations.find_by_table(table).await?;
        for reservation in &existing {
            if let Some(me) = exclude
                && reservation.id.as_ref() == Some(me)
            {
                continue;
            }
            if overlaps(reservation.start_time, start_time, self.duration) {
                tracing::warn!(
                    table = %table.key(),
                    start = %start_time,
                    "Table is already booked at this time"
                );
                return Err(BookingError::Conflict {
                    table_id: table.key().to_string(),
                    start_time,
                });
            }
        }
        Ok(())
    }

    /// Create a reservation
    pub async fn create(&self, input: ReservationCreate) -> BookingResult<Reservation> {
        let table_key = strip_table(input.table_id.trim(), DINING_TABLE);
        let lock = self.lock_for(&table_key);
        let _guard = lock.lock().await;

        let table_exists = self.tables.exists(&table_key).await?;
        validate(&input, table_exists, Utc::now()).map_err(BookingError::Validation)?;

        let table_ref = RecordId::from_table_key(DINING_TABLE, table_key.as_str());
        self.check_no_overlap(&table_ref, input.start_time, None)
            .await?;

        let key = Uuid::new_v4().simple().to_string();
        let reservation = Reservation {
            id: None,
            party_size: input.party_size,
            name: input.name,
            start_time: input.start_time,
            reserved_table: table_ref,
        };

        let created = self.reservations.create(&key, reservation).await?;
        tracing::info!(reservation = %key, table = %table_key, "Reservation created");
        Ok(created)
    }

    /// Update a reservation, overwriting party size, name, start instant
    /// and table reference
    pub async fn update(&self, id: &str, input: ReservationCreate) -> BookingResult<Reservation> {
        let existing = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        let table_key = strip_table(input.table_id.trim(), DINING_TABLE);
        let lock = self.lock_for(&table_key);
        let _guard = lock.lock().await;

        let table_exists = self.tables.exists(&table_key).await?;
        validate(&input, table_exists, Utc::now()).map_err(BookingError::Validation)?;

        let table_ref = RecordId::from_table_key(DINING_TABLE, table_key.as_str());
        self.check_no_overlap(&table_ref, input.start_time, existing.id.as_ref())
            .await?;

        let updated = Reservation {
            id: existing.id.clone(),
            party_size: input.party_size,
            name: input.name,
            start_time: input.start_time,
            reserved_table: table_ref,
        };

        let saved = self
            .reservations
            .update(id, updated)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => BookingError::NotFound(id.to_string()),
                other => BookingError::Repo(other),
            })?;
        tracing::info!(reservation = %id, "Reservation updated");
        Ok(saved)
    }

    /// Delete a reservation. Requires prior existence; removal cannot
    /// create an overlap, so no table lock is taken.
    pub async fn delete(&self, id: &str) -> BookingResult<()> {
        if !self.reservations.exists_by_id(id).await? {
            return Err(BookingError::NotFound(id.to_string()));
        }
        self.reservations.delete(id).await?;
        tracing::info!(reservation = %id, "Reservation deleted");
        Ok(())
    }

    /// All reservations, order unspecified
    pub async fn get_all(&self) -> BookingResult<Vec<Reservation>> {
        Ok(self.reservations.find_all().await?)
    }

    /// Reservation by id
    pub async fn get_by_id(&self, id: &str) -> BookingResult<Option<Reservation>> {
        Ok(self.reservations.find_by_id(id).await?)
    }
}
