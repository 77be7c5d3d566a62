//! # covid19-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateRepository` — read-only access to states and their aggregates
//!   - `DistrictRepository` — CRUD for districts
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StateService` — list, get, stats
//!   - `DistrictService` — create, get, update, delete, owning state name
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `covid19-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
