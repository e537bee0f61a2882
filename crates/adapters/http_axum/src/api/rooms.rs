//! JSON REST handlers for rooms.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;

use realmeet_app::ports::RoomRepository;
use realmeet_domain::error::{FieldViolation, RealmeetError, ValidationError, ViolationCode};
use realmeet_domain::id::RoomId;
use realmeet_domain::room::{CreateRoom, Room};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room.
///
/// Fields are kept as raw JSON so that `null`, missing or mistyped values
/// are reported as validation failures with the offending field names.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub seats: Option<Value>,
}

impl TryFrom<CreateRoomRequest> for CreateRoom {
    type Error = ValidationError;

    fn try_from(req: CreateRoomRequest) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let name = match req.name {
            None => None,
            Some(Value::String(name)) => Some(name),
            Some(_) => {
                violations.push(FieldViolation::new("name", ViolationCode::Invalid));
                None
            }
        };

        let seats = match req.seats {
            None => None,
            Some(Value::Number(n)) => match (n.as_i64(), n.as_u64()) {
                (Some(seats), _) => Some(seats),
                (None, Some(_)) => {
                    violations.push(FieldViolation::new("seats", ViolationCode::ExceedsMaximum));
                    None
                }
                (None, None) => {
                    violations.push(FieldViolation::new("seats", ViolationCode::Invalid));
                    None
                }
            },
            Some(_) => {
                violations.push(FieldViolation::new("seats", ViolationCode::Invalid));
                None
            }
        };

        match ValidationError::from_violations(violations) {
            Some(err) => Err(err),
            None => Ok(Self { name, seats }),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_room_id(id: &str) -> Result<RoomId, ApiError> {
    RoomId::from_str(id).map_err(|_| {
        ApiError::from(RealmeetError::Validation(ValidationError::single(
            "id",
            ViolationCode::Invalid,
        )))
    })
}

/// `GET /v1/rooms/:id`
pub async fn get<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let room_id = parse_room_id(&id)?;
    let room = state.room_service.get_room(room_id).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /v1/rooms`
///
/// Bodies that are not a JSON object are reported against the `body` field.
pub async fn create<RR>(
    State(state): State<AppState<RR>>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected room creation body");
        ApiError::from(RealmeetError::Validation(ValidationError::single(
            "body",
            ViolationCode::Invalid,
        )))
    })?;
    let request = CreateRoom::try_from(req).map_err(RealmeetError::from)?;
    let created = state.room_service.create_room(request).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /v1/rooms/:id`
pub async fn delete<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: RoomRepository + Send + Sync + 'static,
{
    let room_id = parse_room_id(&id)?;
    state.room_service.delete_room(room_id).await?;
    Ok(DeleteResponse::NoContent)
}
