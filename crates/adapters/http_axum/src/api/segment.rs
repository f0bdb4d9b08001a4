//! Coarse path-segment patterns.
//!
//! axum routes cannot carry regex constraints, so handlers check their
//! segments against these patterns first and answer `404` on a mismatch, as
//! an unmatched route would. The service still validates whatever passes.

/// `[0-9]+`
#[must_use]
pub fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// `[-0-9]+`
#[must_use]
pub fn is_rgb(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit() || b == b'-')
}
