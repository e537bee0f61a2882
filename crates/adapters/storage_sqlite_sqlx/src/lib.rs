//! # realmeet-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `realmeet-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Assign room identifiers (`INTEGER PRIMARY KEY AUTOINCREMENT`)
//!
//! ## Dependency rule
//! Depends on `realmeet-app` (for port traits) and `realmeet-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod room_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
