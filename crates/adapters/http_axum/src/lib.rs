//! # realmeet-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the versioned JSON API (`/v1/rooms`, `/v1/rooms/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes and JSON bodies
//!
//! ## Dependency rule
//! Depends on `realmeet-app` (for port traits and services) and `realmeet-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
