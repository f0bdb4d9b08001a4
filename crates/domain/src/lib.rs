//! # huebridge-domain
//!
//! Pure domain model for the huebridge light API.
//!
//! ## Responsibilities
//! - Validated value types decoded from untrusted path parameters:
//!   [`LightIndex`](index::LightIndex), [`BrightnessLevel`](brightness::BrightnessLevel),
//!   [`ColorRgb`](color::ColorRgb)
//! - The opaque [`Light`](light::Light) record handed back by the bridge
//! - The error taxonomy shared by every layer (validation vs. bridge failure)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod brightness;
pub mod color;
pub mod error;
pub mod index;
pub mod light;
