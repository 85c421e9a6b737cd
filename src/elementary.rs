//! Range-checked exponential and its signed, scaled and offset variants.

use crate::machine::SfFloat;
use crate::types::{Error, SfResult};
use crate::utils::{nested_series, sign};

/// Half-width of the band around zero where `e^x - 1` is taken from its
/// Taylor series instead of the direct difference.
pub(crate) const SERIES_CUT: f64 = 0.002;

/// e^x.
///
/// Overflow above `log_max`, underflow below `log_min`; both report 0.0.
#[inline]
pub(crate) fn exp<T: SfFloat>(x: T) -> SfResult<T> {
    if x > T::log_max() {
        Err(Error::overflow())
    } else if x < T::log_min() {
        Err(Error::underflow())
    } else {
        Ok(x.exp())
    }
}

/// sign(sgn) · e^x, with the same thresholds as [`exp`].
#[inline]
pub(crate) fn exp_sgn<T: SfFloat>(x: T, sgn: T) -> SfResult<T> {
    exp(x).map(|e| sign(sgn) * e)
}

/// e^x - 1 without cancellation near zero.
pub(crate) fn expm1<T: SfFloat>(x: T) -> SfResult<T> {
    let one = T::one();
    let cut = T::from_f64(SERIES_CUT);

    if x < T::log_min() {
        Ok(-one)
    } else if x < -cut {
        Ok(x.exp() - one)
    } else if x < cut {
        Ok(x * nested_series(x, 2, 5))
    } else if x < T::log_max() {
        Ok(x.exp() - one)
    } else {
        // True value is unbounded; the 0.0 sentinel is reported instead.
        Err(Error::overflow())
    }
}

/// y · e^x, staying finite whenever the product itself is representable.
///
/// Arguments that could overflow or underflow on their own are combined in
/// log space and exponentiated in two pieces: the integer parts, then the
/// fractional remainders.
pub(crate) fn exp_mult<T: SfFloat>(x: T, y: T) -> SfResult<T> {
    let zero = T::zero();
    let half = T::from_f64(0.5);
    let ay = y.abs();

    if y == zero {
        return Ok(zero);
    }

    let x_safe = x < half * T::log_max() && x > half * T::log_min();
    let y_safe = ay < T::from_f64(0.8) * T::sqrt_max() && ay > T::from_f64(1.2) * T::sqrt_min();
    if x_safe && y_safe {
        return Ok(y * x.exp());
    }

    let ly = ay.ln();
    let lnr = x + ly;
    let margin = T::from_f64(0.01);

    if lnr > T::log_max() - margin {
        Err(Error::overflow())
    } else if lnr < T::log_min() + margin {
        Err(Error::underflow())
    } else {
        let m = x.floor();
        let k = ly.floor();
        let frac = (x - m) + (ly - k);
        Ok(sign(y) * (m + k).exp() * frac.exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    #[test]
    fn exp_in_range() {
        assert_eq!(exp(0.0_f64).unwrap(), 1.0);
        assert!((exp(1.0_f64).unwrap() - core::f64::consts::E).abs() < 1e-15);
        let product = exp(-700.0_f64).unwrap() * exp(700.0_f64).unwrap();
        assert!((product - 1.0).abs() < 1e-13);
    }

    #[test]
    fn exp_out_of_range() {
        let err = exp(1000.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
        assert_eq!(err.value, 0.0);

        let err = exp(-1000.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Underflow);
        assert_eq!(err.value, 0.0);

        assert_eq!(exp(100.0_f32).unwrap_err().kind, ErrorKind::Overflow);
    }

    #[test]
    fn exp_sgn_uses_sign_of_multiplier() {
        let e = exp(1.0_f64).unwrap();
        assert_eq!(exp_sgn(1.0_f64, -3.0).unwrap(), -e);
        assert_eq!(exp_sgn(1.0_f64, 0.0).unwrap(), e);
        assert_eq!(exp_sgn(1.0_f64, 42.0).unwrap(), e);
        assert_eq!(exp_sgn(800.0_f64, -1.0).unwrap_err().kind, ErrorKind::Overflow);
    }

    #[test]
    fn expm1_series_branch_near_zero() {
        let x = 1e-10_f64;
        let got = expm1(x).unwrap();
        let expected = 1.00000000005e-10;
        assert!(((got - expected) / expected).abs() < 1e-15, "expm1({x}) = {got}");
        // The direct difference loses about six digits here.
        assert!(((x.exp() - 1.0 - expected) / expected).abs() > 1e-12);
    }

    #[test]
    fn expm1_branches_agree_at_cut() {
        let below = expm1(0.0019999_f64).unwrap();
        let above = expm1(0.0020001_f64).unwrap();
        assert!(above > below);
        // Relative step of 1e-4 in x gives about the same step in the value.
        let step = (above - below) / below;
        assert!((step / 1e-4 - 1.0).abs() < 1e-2, "step = {step}");
    }

    #[test]
    fn expm1_limits() {
        assert_eq!(expm1(-800.0_f64).unwrap(), -1.0);
        assert!((expm1(-1.0_f64).unwrap() - (-0.6321205588285577)).abs() < 1e-15);
        let err = expm1(710.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
        assert_eq!(err.value, 0.0);
    }

    #[test]
    fn exp_mult_in_range_is_plain_product() {
        assert_eq!(exp_mult(1.0_f64, 0.0).unwrap(), 0.0);
        let got = exp_mult(2.0_f64, -3.0).unwrap();
        assert!((got - (-3.0 * 2.0_f64.exp())).abs() < 1e-13);
    }

    #[test]
    fn exp_mult_compensates_large_exponent() {
        // e^800 overflows on its own, e^800 * e^-200 does not.
        let y = (-200.0_f64).exp();
        let got = exp_mult(800.0_f64, y).unwrap();
        let expected = 600.0_f64.exp();
        assert!(((got - expected) / expected).abs() < 1e-12, "{got} vs {expected}");
    }

    #[test]
    fn exp_mult_out_of_range() {
        assert_eq!(exp_mult(700.0_f64, 1e10).unwrap_err().kind, ErrorKind::Overflow);
        assert_eq!(exp_mult(-700.0_f64, 1e-10).unwrap_err().kind, ErrorKind::Underflow);
    }
}
