//! # covid19-domain
//!
//! Pure domain model for the covid19-india statistics service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, raw column values, error conventions
//! - Define **States** (pre-seeded, read-only through the API)
//! - Define **Districts** (per-state case counters, full CRUD)
//! - Define the read projections served by the API (aggregated
//!   [`StateStats`](state::StateStats), [`StateName`](state::StateName))
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod scalar;

pub mod district;
pub mod state;
