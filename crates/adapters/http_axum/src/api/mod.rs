//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, post};

use realmeet_app::ports::RoomRepository;

use crate::state::AppState;

/// Build the `/v1` sub-router.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/rooms", post(rooms::create::<RR>))
        .route(
            "/rooms/{id}",
            get(rooms::get::<RR>).delete(rooms::delete::<RR>),
        )
}
