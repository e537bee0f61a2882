//! `SQLite` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use realmeet_app::ports::RoomRepository;
use realmeet_domain::error::RealmeetError;
use realmeet_domain::id::RoomId;
use realmeet_domain::room::{NewRoom, Room};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let seats: i64 = row.try_get("seats")?;
        let active: bool = row.try_get("active")?;

        let seats = u32::try_from(seats).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Room {
            id: RoomId::from_raw(id),
            name,
            seats,
            active,
        }))
    }
}

const INSERT: &str = "INSERT INTO rooms (name, seats, active) VALUES (?, ?, 1)";
const SELECT_BY_ID: &str = "SELECT id, name, seats, active FROM rooms WHERE id = ?";
const DEACTIVATE_BY_ID: &str = "UPDATE rooms SET active = 0 WHERE id = ?";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn insert(&self, room: NewRoom) -> impl Future<Output = Result<Room, RealmeetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(room.name())
                .bind(i64::from(room.seats()))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room.into_room(RoomId::from_raw(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, RealmeetError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn deactivate(&self, id: RoomId) -> impl Future<Output = Result<bool, RealmeetError>> + Send {
        let pool = self.pool.clone();
        async move {
            // SQLite counts matched rows, so an already inactive room still reports 1.
            let result = sqlx::query(DEACTIVATE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
