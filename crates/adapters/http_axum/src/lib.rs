//! # huebridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the light API under `/api/lights/`
//! - Apply the coarse path-segment filter (digits for indices and levels,
//!   digits and `-` for colors) before handing segments to the service
//! - Map application results into HTTP responses: JSON for light data,
//!   `application/text` for diagnostics
//!
//! ## Dependency rule
//! Depends on `huebridge-app` (for the port trait and service) and
//! `huebridge-domain` (for error mapping). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
