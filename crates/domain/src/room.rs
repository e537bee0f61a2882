//! Room: a bookable meeting space with a name and a seat capacity.
//!
//! Rooms are never physically removed. Deleting a room flips `active` to
//! `false`, after which readers must treat it as absent.

use serde::Serialize;

use crate::error::{FieldViolation, ValidationError, ViolationCode};
use crate::id::RoomId;

/// Smallest accepted seat capacity.
pub const MIN_SEATS: i64 = 1;

/// A persisted meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub seats: u32,
    pub active: bool,
}

impl Room {
    /// Whether the room is still visible to readers.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Optional upper bounds applied on top of the fixed rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomLimits {
    /// Largest accepted seat capacity, unbounded when `None`.
    pub max_seats: Option<u32>,
    /// Longest accepted name in characters, unbounded when `None`.
    pub max_name_length: Option<usize>,
}

/// Raw, unvalidated request to create a room.
///
/// Both fields are optional so that a missing value is reported as a
/// validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRoom {
    pub name: Option<String>,
    pub seats: Option<i64>,
}

impl CreateRoom {
    /// Request with both fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, seats: i64) -> Self {
        Self {
            name: Some(name.into()),
            seats: Some(seats),
        }
    }

    /// Check every field and produce input the store may persist.
    ///
    /// All offending fields are reported at once.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `name` is missing, blank or too long,
    /// or when `seats` is missing, below [`MIN_SEATS`] or above the limit.
    pub fn validate(self, limits: &RoomLimits) -> Result<NewRoom, ValidationError> {
        let mut violations = Vec::new();

        let name = match self.name {
            None => {
                violations.push(FieldViolation::new("name", ViolationCode::Missing));
                None
            }
            Some(name) if name.trim().is_empty() => {
                violations.push(FieldViolation::new("name", ViolationCode::Blank));
                None
            }
            Some(name)
                if limits
                    .max_name_length
                    .is_some_and(|max| name.chars().count() > max) =>
            {
                violations.push(FieldViolation::new("name", ViolationCode::TooLong));
                None
            }
            Some(name) => Some(name),
        };

        let seats = match self.seats {
            None => {
                violations.push(FieldViolation::new("seats", ViolationCode::Missing));
                None
            }
            Some(seats) if seats < MIN_SEATS => {
                violations.push(FieldViolation::new("seats", ViolationCode::BelowMinimum));
                None
            }
            Some(seats) => match u32::try_from(seats) {
                Ok(seats) if limits.max_seats.is_none_or(|max| seats <= max) => Some(seats),
                _ => {
                    violations.push(FieldViolation::new(
                        "seats",
                        ViolationCode::ExceedsMaximum,
                    ));
                    None
                }
            },
        };

        match (name, seats) {
            (Some(name), Some(seats)) => Ok(NewRoom { name, seats }),
            _ => Err(ValidationError::from_violations(violations)
                .unwrap_or_else(|| ValidationError::single("room", ViolationCode::Invalid))),
        }
    }
}

/// Validated input for the store's insert operation.
///
/// Can only be obtained through [`CreateRoom::validate`] and carries no
/// identifier: the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    name: String,
    seats: u32,
}

impl NewRoom {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seats(&self) -> u32 {
        self.seats
    }

    /// Turn the input into an active [`Room`] under a store-assigned id.
    #[must_use]
    pub fn into_room(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
            seats: self.seats,
            active: true,
        }
    }
}
