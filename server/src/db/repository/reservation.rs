//! Reservation Repository
//!
//! The `table` link is stored in the same "table:id" string form the
//! serde helpers emit, so equality filters bind the stringified id.

use super::{BaseRepository, RepoError, RepoResult, strip_table};
use crate::db::models::Reservation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn record_id(id: &str) -> RecordId {
        RecordId::from_table_key(TABLE, strip_table(id, TABLE))
    }

    /// Find all reservations
    pub async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let reservation: Option<Reservation> =
            self.base.db().select(Self::record_id(id)).await?;
        Ok(reservation)
    }

    /// Check whether a reservation exists
    pub async fn exists_by_id(&self, id: &str) -> RepoResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Find all reservations bound to a table
    pub async fn find_by_table(&self, table: &RecordId) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation WHERE reserved_table = $table")
            .bind(("table", table.to_string()))
            .await?
            .take(0)?;
        Ok(reservations)
    }

    /// Create a reservation under the given key (engine-generated)
    pub async fn create(&self, key: &str, reservation: Reservation) -> RepoResult<Reservation> {
        let created: Option<Reservation> = self
            .base
            .db()
            .create(RecordId::from_table_key(TABLE, key))
            .content(reservation)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Overwrite an existing reservation's fields
    pub async fn update(&self, id: &str, reservation: Reservation) -> RepoResult<Reservation> {
        // 手动构建 UPDATE 语句，避免 id 被序列化为字符串
        self.base
            .db()
            .query("UPDATE $thing SET party_size = $party_size, name = $name, start_time = $start_time, reserved_table = $table")
            .bind(("thing", Self::record_id(id)))
            .bind(("party_size", reservation.party_size))
            .bind(("name", reservation.name))
            .bind(("start_time", reservation.start_time))
            .bind(("table", reservation.reserved_table.to_string()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Hard delete a reservation
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Reservation> = self.base.db().delete(Self::record_id(id)).await?;
        Ok(deleted.is_some())
    }
}
