//! # covid19-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `covid19-app::ports::storage`
//! - Own the single storage connection for the lifetime of the process
//! - Run database migrations (schema and seeded states, embedded with sqlx)
//! - Hold one parameterized statement per operation, aliasing `snake_case`
//!   columns to the API's `camelCase` names
//! - Bind request values with their JSON type so column affinity applies
//!
//! ## Dependency rule
//! Depends on `covid19-app` (for port traits) and `covid19-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod district_repo;
mod error;
mod pool;
mod scalar;
mod state_repo;

pub use district_repo::SqliteDistrictRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use state_repo::SqliteStateRepository;
