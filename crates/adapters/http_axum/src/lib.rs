//! # covid19-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for states (`/states/…`) and
//!   districts (`/districts/…`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or plain text)
//! - Collapse every failure into a generic `500 Internal Server Error`
//!   without leaking storage details
//!
//! ## Dependency rule
//! Depends on `covid19-app` (for port traits and services) and `covid19-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
