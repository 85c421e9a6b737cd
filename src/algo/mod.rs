//! Internal algorithm modules behind the relative exponentials.
//!
//! All functions are `pub(crate)`; the public API in the crate root wraps
//! them.
//!
//! # Return value convention
//!
//! Fallible routines return [`SfResult`](crate::SfResult). The error always
//! carries the value to report in place of the true result, so callers can
//! forward it unchanged or fall back to it.
//!
//! # Clippy suppressions
//!
//! Table-driven modules carry `clippy::excessive_precision` /
//! `clippy::approx_constant`: coefficients are written out to more digits
//! than f64 holds so that the same literals serve f32 and f64.

// Large-argument expansions
pub(crate) mod asym;
pub(crate) mod gamma;

// Moderate range
pub(crate) mod cf;
