//! # huebridge-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the bridge adapter must implement
//!   (driven/outbound port): `LightBridge`: enumerate lights, set
//!   brightness, set color
//! - Define the **driving/inbound** use-case struct: `LightService`: turn
//!   untrusted path parameters into validated domain values, call the bridge,
//!   and report either a payload or a typed error
//!
//! ## Dependency rule
//! Depends on `huebridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
