//! Pure Rust exponential and relative-exponential special functions.
//!
//! This crate evaluates e^x, sgn·e^x, y·e^x, e^x − 1 and the relative
//! exponentials
//!
//! ```text
//! exprel_n(x) = n!/x^n (e^x − Σ_{k<n} x^k/k!)
//! ```
//!
//! accurately over the whole floating-point range, switching between direct
//! evaluation, Taylor series near zero, a continued fraction and
//! large-argument asymptotic expansions.
//!
//! # Two forms per function
//!
//! Every function comes in two forms:
//!
//! - `*_raw` returns [`SfResult`]: the value, or an [`Error`] whose
//!   [`kind`](Error::kind) says what went wrong and whose
//!   [`value`](Error::value) holds the sentinel (0.0) or, for
//!   [`ErrorKind::MaxIterations`], the best estimate reached.
//! - the plain form returns the number directly. On failure it logs a
//!   warning through the [`log`] facade and returns the same sentinel.
//!
//! ```
//! use exprel::{exprel_n, exprel_n_raw, ErrorKind};
//!
//! let v = exprel_n(3, 2.0_f64);
//! assert!((v - 1.7918).abs() < 1e-4);
//!
//! let err = exprel_n_raw(-1, 2.0_f64).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Domain);
//! assert_eq!(err.value, 0.0);
//! ```
//!
//! Overflow is reported as 0.0 rather than infinity, matching the sentinel
//! convention of the other error kinds.

#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

pub mod machine;
pub mod types;

mod algo;
mod elementary;
mod exprel;
mod utils;

pub use machine::SfFloat;
pub use types::{Error, ErrorKind, SfResult};

/// Unwrap a raw result, logging a warning and returning the sentinel on failure.
#[inline]
fn or_warn<T: SfFloat>(result: SfResult<T>, call: fmt::Arguments<'_>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => {
            log::warn!("{call}: {err}");
            err.value
        }
    }
}

// ── Elementary exponentials ──

/// e^x with overflow/underflow reporting.
#[inline]
pub fn exp_raw<T: SfFloat>(x: T) -> SfResult<T> {
    elementary::exp(x)
}

/// e^x.
pub fn exp<T: SfFloat>(x: T) -> T {
    or_warn(elementary::exp(x), format_args!("exp({x:?})"))
}

/// sign(sgn)·e^x, where sign(s) is +1 for s ≥ 0 and −1 otherwise.
#[inline]
pub fn exp_sgn_raw<T: SfFloat>(x: T, sgn: T) -> SfResult<T> {
    elementary::exp_sgn(x, sgn)
}

/// sign(sgn)·e^x.
pub fn exp_sgn<T: SfFloat>(x: T, sgn: T) -> T {
    or_warn(
        elementary::exp_sgn(x, sgn),
        format_args!("exp_sgn({x:?}, {sgn:?})"),
    )
}

/// y·e^x, finite whenever the product is representable even if e^x is not.
#[inline]
pub fn exp_mult_raw<T: SfFloat>(x: T, y: T) -> SfResult<T> {
    elementary::exp_mult(x, y)
}

/// y·e^x.
pub fn exp_mult<T: SfFloat>(x: T, y: T) -> T {
    or_warn(
        elementary::exp_mult(x, y),
        format_args!("exp_mult({x:?}, {y:?})"),
    )
}

/// e^x − 1, accurate near x = 0.
#[inline]
pub fn expm1_raw<T: SfFloat>(x: T) -> SfResult<T> {
    elementary::expm1(x)
}

/// e^x − 1.
pub fn expm1<T: SfFloat>(x: T) -> T {
    or_warn(elementary::expm1(x), format_args!("expm1({x:?})"))
}

// ── Relative exponentials ──

/// (e^x − 1)/x.
#[inline]
pub fn exprel_raw<T: SfFloat>(x: T) -> SfResult<T> {
    exprel::exprel(x)
}

/// (e^x − 1)/x.
pub fn exprel<T: SfFloat>(x: T) -> T {
    or_warn(exprel::exprel(x), format_args!("exprel({x:?})"))
}

/// 2(e^x − 1 − x)/x².
#[inline]
pub fn exprel_2_raw<T: SfFloat>(x: T) -> SfResult<T> {
    exprel::exprel_2(x)
}

/// 2(e^x − 1 − x)/x².
pub fn exprel_2<T: SfFloat>(x: T) -> T {
    or_warn(exprel::exprel_2(x), format_args!("exprel_2({x:?})"))
}

/// N-th relative exponential, N ≥ 0. Negative `n` is a domain error.
#[inline]
pub fn exprel_n_raw<T: SfFloat>(n: i32, x: T) -> SfResult<T> {
    exprel::exprel_n(n, x)
}

/// N-th relative exponential.
pub fn exprel_n<T: SfFloat>(n: i32, x: T) -> T {
    or_warn(exprel::exprel_n(n, x), format_args!("exprel_n({n}, {x:?})"))
}

// ── Gamma-function helpers ──

/// ln Γ(x) for x > 0; domain error otherwise.
#[inline]
pub fn ln_gamma_raw<T: SfFloat>(x: T) -> SfResult<T> {
    algo::gamma::ln_gamma(x)
}

/// ln Γ(x).
pub fn ln_gamma<T: SfFloat>(x: T) -> T {
    or_warn(algo::gamma::ln_gamma(x), format_args!("ln_gamma({x:?})"))
}

/// ln(n!).
#[inline]
pub fn ln_factorial<T: SfFloat>(n: u32) -> T {
    algo::gamma::ln_factorial(n)
}
