//! # realmeet-domain
//!
//! Pure domain model for the realmeet meeting-room service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Rooms** (bookable spaces with a name, a seat capacity and an
//!   active flag)
//! - Define the create-request types and the validation rules that turn a raw
//!   request into input the storage layer may accept
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod room;
