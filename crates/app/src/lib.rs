//! # realmeet-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository`: id assignment, lookup and deactivation of rooms
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService`: validate, create, get, delete
//! - Own the business rules the store must not know about: input validation
//!   and the "inactive rooms are invisible" read rule
//!
//! ## Dependency rule
//! Depends on `realmeet-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
