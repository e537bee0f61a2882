//! Shared application state for axum handlers.

use std::sync::Arc;

use realmeet_app::ports::RoomRepository;
use realmeet_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<RR> {
    /// Room lifecycle service.
    pub room_service: Arc<RoomService<RR>>,
}

impl<RR> Clone for AppState<RR> {
    fn clone(&self) -> Self {
        Self {
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<RR> AppState<RR>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(room_service: RoomService<RR>) -> Self {
        Self {
            room_service: Arc::new(room_service),
        }
    }
}
