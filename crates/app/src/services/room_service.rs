//! Room service: use-cases for managing meeting rooms.

use realmeet_domain::error::{NotFoundError, RealmeetError};
use realmeet_domain::id::RoomId;
use realmeet_domain::room::{CreateRoom, Room, RoomLimits};

use crate::ports::RoomRepository;

/// Application service for the room lifecycle.
///
/// Validation and the visibility rule live here; the repository only stores.
pub struct RoomService<R> {
    repo: R,
    limits: RoomLimits,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository, without upper
    /// bounds on seats or name length.
    pub fn new(repo: R) -> Self {
        Self::with_limits(repo, RoomLimits::default())
    }

    /// Create a new service enforcing the given limits on creation.
    pub fn with_limits(repo: R, limits: RoomLimits) -> Self {
        Self { repo, limits }
    }

    /// Look up an active room by id.
    ///
    /// # Errors
    ///
    /// Returns [`RealmeetError::NotFound`] when no room with `id` exists or
    /// the room has been deleted, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, id: RoomId) -> Result<Room, RealmeetError> {
        match self.repo.get_by_id(id).await? {
            Some(room) if room.is_active() => Ok(room),
            Some(_) => {
                tracing::debug!(%id, "room is inactive");
                Err(not_found(id))
            }
            None => {
                tracing::debug!(%id, "room does not exist");
                Err(not_found(id))
            }
        }
    }

    /// Validate the request and persist a new active room.
    ///
    /// The repository is not called when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`RealmeetError::Validation`] listing every offending field,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_room(&self, request: CreateRoom) -> Result<Room, RealmeetError> {
        let new_room = request.validate(&self.limits).inspect_err(|err| {
            tracing::debug!(%err, "rejected room creation");
        })?;
        let room = self.repo.insert(new_room).await?;
        tracing::info!(id = %room.id, name = %room.name, seats = room.seats, "room created");
        Ok(room)
    }

    /// Retire a room. The record is kept but becomes invisible to reads.
    ///
    /// # Errors
    ///
    /// Returns [`RealmeetError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_room(&self, id: RoomId) -> Result<(), RealmeetError> {
        if self.repo.deactivate(id).await? {
            tracing::info!(%id, "room deactivated");
            Ok(())
        } else {
            tracing::debug!(%id, "room does not exist");
            Err(not_found(id))
        }
    }
}

fn not_found(id: RoomId) -> RealmeetError {
    NotFoundError {
        entity: "Room",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use realmeet_domain::error::ViolationCode;
    use realmeet_domain::room::NewRoom;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryRoomRepo {
        store: Mutex<BTreeMap<RoomId, Room>>,
        inserts: Mutex<usize>,
    }

    impl InMemoryRoomRepo {
        fn insert_count(&self) -> usize {
            *self.inserts.lock().unwrap()
        }

        fn raw(&self, id: RoomId) -> Option<Room> {
            self.store.lock().unwrap().get(&id).cloned()
        }
    }

    impl RoomRepository for InMemoryRoomRepo {
        fn insert(
            &self,
            room: NewRoom,
        ) -> impl Future<Output = Result<Room, RealmeetError>> + Send {
            let mut store = self.store.lock().unwrap();
            let mut inserts = self.inserts.lock().unwrap();
            *inserts += 1;
            let id = RoomId::from_raw(i64::try_from(*inserts).unwrap());
            let room = room.into_room(id);
            store.insert(id, room.clone());
            async { Ok(room) }
        }

        fn get_by_id(
            &self,
            id: RoomId,
        ) -> impl Future<Output = Result<Option<Room>, RealmeetError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn deactivate(
            &self,
            id: RoomId,
        ) -> impl Future<Output = Result<bool, RealmeetError>> + Send {
            let mut store = self.store.lock().unwrap();
            let found = store.get_mut(&id).map(|room| room.active = false).is_some();
            async move { Ok(found) }
        }
    }

    fn make_service() -> (RoomService<Arc<InMemoryRoomRepo>>, Arc<InMemoryRoomRepo>) {
        let repo = Arc::new(InMemoryRoomRepo::default());
        (RoomService::new(Arc::clone(&repo)), repo)
    }

    #[tokio::test]
    async fn should_create_room_when_valid() {
        let (svc, _) = make_service();

        let room = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();

        assert_eq!(room.id, RoomId::from_raw(1));
        assert_eq!(room.name, "Alpha");
        assert_eq!(room.seats, 4);
        assert!(room.active);
    }

    #[tokio::test]
    async fn should_return_created_room_when_fetched() {
        let (svc, _) = make_service();
        let created = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();

        let fetched = svc.get_room(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_without_touching_store_when_name_is_null() {
        let (svc, repo) = make_service();
        let request = CreateRoom {
            name: None,
            seats: Some(4),
        };

        let result = svc.create_room(request).await;

        assert!(matches!(
            result,
            Err(RealmeetError::Validation(ref err)) if err.has_field("name")
        ));
        assert_eq!(repo.insert_count(), 0);
    }

    #[tokio::test]
    async fn should_reject_create_when_seats_not_positive() {
        let (svc, repo) = make_service();

        let result = svc.create_room(CreateRoom::new("Alpha", 0)).await;

        let err = match result {
            Err(RealmeetError::Validation(err)) => err,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(err.violations()[0].code, ViolationCode::BelowMinimum);
        assert_eq!(repo.insert_count(), 0);
    }

    #[tokio::test]
    async fn should_enforce_configured_limits() {
        let repo = Arc::new(InMemoryRoomRepo::default());
        let svc = RoomService::with_limits(
            Arc::clone(&repo),
            RoomLimits {
                max_seats: Some(10),
                max_name_length: None,
            },
        );

        let result = svc.create_room(CreateRoom::new("Hall", 11)).await;
        assert!(matches!(result, Err(RealmeetError::Validation(_))));
        assert_eq!(repo.insert_count(), 0);
    }

    #[tokio::test]
    async fn should_allow_duplicate_names() {
        let (svc, _) = make_service();
        let first = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();
        let second = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_missing() {
        let (svc, _) = make_service();
        let result = svc.get_room(RoomId::from_raw(999)).await;
        assert!(matches!(result, Err(RealmeetError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_hide_room_after_delete_but_keep_record() {
        let (svc, repo) = make_service();
        let room = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();

        svc.delete_room(room.id).await.unwrap();

        let result = svc.get_room(room.id).await;
        assert!(matches!(result, Err(RealmeetError::NotFound(_))));

        let stored = repo.raw(room.id).unwrap();
        assert!(!stored.active);
        assert_eq!(stored.name, room.name);
        assert_eq!(stored.seats, room.seats);
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_inactive_room_again() {
        let (svc, _) = make_service();
        let room = svc.create_room(CreateRoom::new("Alpha", 4)).await.unwrap();

        svc.delete_room(room.id).await.unwrap();
        svc.delete_room(room.id).await.unwrap();
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_room() {
        let (svc, _) = make_service();
        let result = svc.delete_room(RoomId::from_raw(999)).await;
        assert!(matches!(result, Err(RealmeetError::NotFound(_))));
    }
}
