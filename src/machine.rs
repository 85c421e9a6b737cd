//! Machine constants and the `SfFloat` trait.
//!
//! The derived thresholds partition the real line into the regimes used by
//! the evaluators: the overflow/underflow limits of `exp`, the cube root of
//! epsilon that bounds the tiny-argument Taylor branch, and the square root
//! of the largest value used to rescale continued-fraction accumulators.

use num_traits::Float;

/// Floating-point trait for exponential-family evaluation.
///
/// Implemented for `f64` and `f32`.
pub trait SfFloat: Float + core::fmt::Debug + core::fmt::Display + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;
    /// Number of binary digits in the mantissa.
    const MACH_DIGITS: i32;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// ln(MACH_HUGE): `exp(x)` overflows above this.
    fn log_max() -> Self;
    /// ln(MACH_TINY): `exp(x)` underflows below this.
    fn log_min() -> Self;
    /// MACH_EPSILON^(1/3).
    fn root3_eps() -> Self;
    /// sqrt(MACH_HUGE).
    fn sqrt_max() -> Self;
    /// sqrt(MACH_TINY).
    fn sqrt_min() -> Self;

    /// Integer conversion for orders and loop counters.
    #[inline]
    fn from_i32(n: i32) -> Self {
        Self::from_f64(f64::from(n))
    }
}

impl SfFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;
    const MACH_DIGITS: i32 = 53;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn log_max() -> f64 {
        7.0978271289338397e+02
    }
    #[inline]
    fn log_min() -> f64 {
        -7.0839641853226408e+02
    }
    #[inline]
    fn root3_eps() -> f64 {
        6.0554544523933429e-06
    }
    #[inline]
    fn sqrt_max() -> f64 {
        1.3407807929942596e+154
    }
    #[inline]
    fn sqrt_min() -> f64 {
        1.4916681462400413e-154
    }
}

// Written at full f64 precision; the compiler rounds to f32.
#[allow(clippy::excessive_precision)]
impl SfFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;
    const MACH_DIGITS: i32 = 24;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn log_max() -> f32 {
        8.8722839052068352e+01
    }
    #[inline]
    fn log_min() -> f32 {
        -8.7336544750553102e+01
    }
    #[inline]
    fn root3_eps() -> f32 {
        4.9215666011518501e-03
    }
    #[inline]
    fn sqrt_max() -> f32 {
        1.8446743523953730e+19
    }
    #[inline]
    fn sqrt_min() -> f32 {
        1.0842021724855044e-19
    }
}
