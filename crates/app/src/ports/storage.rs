//! Storage port: repository traits for persistence.

use std::future::Future;

use realmeet_domain::error::RealmeetError;
use realmeet_domain::id::RoomId;
use realmeet_domain::room::{NewRoom, Room};

/// Durable keyed storage for [`Room`]s.
///
/// Implementations own identifier assignment and apply no business rules:
/// lookups return inactive rooms as well.
pub trait RoomRepository {
    /// Persist a new active room under a freshly assigned, never reused id.
    fn insert(&self, room: NewRoom) -> impl Future<Output = Result<Room, RealmeetError>> + Send;

    /// Get a room by id whatever its `active` flag.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, RealmeetError>> + Send;

    /// Mark a room inactive.
    ///
    /// Resolves to `false` when no room with `id` exists. Deactivating an
    /// inactive room succeeds.
    fn deactivate(&self, id: RoomId) -> impl Future<Output = Result<bool, RealmeetError>> + Send;
}

impl<T: RoomRepository + Send + Sync> RoomRepository for std::sync::Arc<T> {
    fn insert(&self, room: NewRoom) -> impl Future<Output = Result<Room, RealmeetError>> + Send {
        (**self).insert(room)
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, RealmeetError>> + Send {
        (**self).get_by_id(id)
    }

    fn deactivate(&self, id: RoomId) -> impl Future<Output = Result<bool, RealmeetError>> + Send {
        (**self).deactivate(id)
    }
}
