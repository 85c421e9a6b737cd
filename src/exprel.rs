//! Relative exponentials exprel(x), exprel_2(x) and exprel_n(n, x).
//!
//! exprel_n(x) = n!/x^n (e^x - Σ_{k<n} x^k/k!), so exprel_0 = e^x,
//! exprel_1 = (e^x - 1)/x and exprel_2 = 2 (e^x - 1 - x)/x^2.
//! All of them equal 1 at x = 0 and increase monotonically in x.

use crate::algo::asym::{large_negative, large_positive, moderate_positive};
use crate::algo::cf::exprel_n_cf;
use crate::elementary::{self, SERIES_CUT};
use crate::machine::SfFloat;
use crate::types::{Error, SfResult};
use crate::utils::nested_series;

/// (e^x - 1)/x.
pub(crate) fn exprel<T: SfFloat>(x: T) -> SfResult<T> {
    let one = T::one();
    let cut = T::from_f64(SERIES_CUT);

    if x < T::log_min() {
        Ok(-one / x)
    } else if x < -cut {
        Ok((x.exp() - one) / x)
    } else if x < cut {
        Ok(nested_series(x, 2, 5))
    } else if x < T::log_max() {
        Ok((x.exp() - one) / x)
    } else {
        Err(Error::overflow())
    }
}

/// 2 (e^x - 1 - x)/x^2.
pub(crate) fn exprel_2<T: SfFloat>(x: T) -> SfResult<T> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let cut = T::from_f64(SERIES_CUT);

    if x < T::log_min() {
        Ok(-two / x * (one + one / x))
    } else if x < -cut {
        Ok(two * (x.exp() - one - x) / (x * x))
    } else if x < cut {
        Ok(nested_series(x, 3, 6))
    } else if x < T::log_max() {
        Ok(two * (x.exp() - one - x) / (x * x))
    } else {
        Err(Error::overflow())
    }
}

/// exprel_n(x) for integer order n >= 0.
///
/// The branches are tried in order; each one assumes the earlier ones have
/// already excluded their part of the (n, x) plane.
///
/// | condition               | method                                   |
/// |-------------------------|------------------------------------------|
/// | n < 0                   | domain error                             |
/// | x == 0                  | 1                                        |
/// | \|x\| < eps^(1/3) n     | 1 + x/(n+1) (1 + x/(n+2))                |
/// | n == 0, 1, 2            | `exp`, `exprel`, `exprel_2`              |
/// | x > 12 n                | e^x n!/x^n                               |
/// | n < x <= 12 n           | e^x n!/x^n (1 - Γ(n, x)/Γ(n))            |
/// | -10 n < x <= n          | continued fraction                       |
/// | x <= -10 n              | -(n/x) Σ (n-1)!/(n-1-k)! x^(-k)          |
pub(crate) fn exprel_n<T: SfFloat>(n: i32, x: T) -> SfResult<T> {
    let one = T::one();
    let nf = T::from_i32(n);

    if n < 0 {
        Err(Error::domain())
    } else if x == T::zero() {
        Ok(one)
    } else if x.abs() < T::root3_eps() * nf {
        Ok(one + x / (nf + one) * (one + x / (nf + T::from_f64(2.0))))
    } else if n == 0 {
        elementary::exp(x)
    } else if n == 1 {
        exprel(x)
    } else if n == 2 {
        exprel_2(x)
    } else if x > T::from_f64(12.0) * nf {
        large_positive(n, x)
    } else if x > nf {
        moderate_positive(n, x)
    } else if x > T::from_f64(-10.0) * nf {
        exprel_n_cf(n, x)
    } else {
        Ok(large_negative(n, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    fn rel_err(got: f64, expected: f64) -> f64 {
        ((got - expected) / expected).abs()
    }

    #[test]
    fn exprel_values() {
        let e = 1.0_f64.exp();
        assert!(rel_err(exprel(1.0_f64).unwrap(), e - 1.0) < 1e-15);
        assert!(rel_err(exprel(-1.0_f64).unwrap(), 1.0 - 1.0 / e) < 1e-15);
        assert_eq!(exprel(0.0_f64).unwrap(), 1.0);
        assert!(rel_err(exprel(1e-3_f64).unwrap(), 1.000500166708342) < 1e-15);
    }

    #[test]
    fn exprel_limits() {
        assert_eq!(exprel(-1000.0_f64).unwrap(), 1e-3);
        let err = exprel(710.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
        assert_eq!(err.value, 0.0);
    }

    #[test]
    fn exprel_2_values() {
        let e = 1.0_f64.exp();
        assert!(rel_err(exprel_2(1.0_f64).unwrap(), 2.0 * (e - 2.0)) < 1e-15);
        assert!(rel_err(exprel_2(-1.0_f64).unwrap(), 2.0 / e) < 1e-15);
        // 1 + x/3 + x^2/12 + x^3/60 + x^4/360 + ...
        let x = 1e-3_f64;
        let expected = 1.0 + x / 3.0 + x * x / 12.0 + x * x * x / 60.0 + x * x * x * x / 360.0;
        assert!(rel_err(exprel_2(x).unwrap(), expected) < 1e-15);
    }

    #[test]
    fn exprel_2_limits() {
        let x = -1000.0_f64;
        assert_eq!(exprel_2(x).unwrap(), -2.0 / x * (1.0 + 1.0 / x));
        assert_eq!(exprel_2(720.0_f64).unwrap_err().kind, ErrorKind::Overflow);
    }

    #[test]
    fn exprel_n_negative_order_is_domain_error() {
        for x in [-3.0_f64, 0.0, 2.5] {
            let err = exprel_n(-1, x).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Domain);
            assert_eq!(err.value, 0.0);
        }
    }

    #[test]
    fn exprel_n_fixed_point_at_zero() {
        for n in [0, 1, 2, 3, 10, 1000] {
            assert_eq!(exprel_n(n, 0.0_f64).unwrap(), 1.0, "n={n}");
        }
    }

    #[test]
    fn exprel_n_low_orders_delegate() {
        for x in [-3.0_f64, -0.5, 0.7, 4.0] {
            assert_eq!(exprel_n(0, x).unwrap(), elementary::exp(x).unwrap());
            assert_eq!(exprel_n(1, x).unwrap(), exprel(x).unwrap());
            assert_eq!(exprel_n(2, x).unwrap(), exprel_2(x).unwrap());
        }
        assert_eq!(exprel_n(0, 1000.0_f64).unwrap_err().kind, ErrorKind::Overflow);
    }

    #[test]
    fn exprel_n_tiny_branch_precedes_delegation() {
        // For n = 1 and |x| below eps^(1/3), the Taylor branch answers.
        let x = 1e-6_f64;
        assert_eq!(exprel_n(1, x).unwrap(), 1.0 + x / 2.0 * (1.0 + x / 3.0));
        let x = 1e-5_f64;
        assert_eq!(exprel_n(10, x).unwrap(), 1.0 + x / 11.0 * (1.0 + x / 12.0));
    }

    #[test]
    fn exprel_n_each_regime_n3() {
        let closed = |x: f64| 6.0 / (x * x * x) * (x.exp() - 1.0 - x - 0.5 * x * x);
        // continued fraction, moderate positive, large positive, large negative
        for x in [-5.0, 2.0, 10.0, 30.0, 50.0, -100.0] {
            let got = exprel_n(3, x).unwrap();
            assert!(rel_err(got, closed(x)) < 1e-12, "x={x}: {got} vs {}", closed(x));
        }
    }

    #[test]
    fn exprel_n_large_positive_overflows() {
        let err = exprel_n(5, 2000.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
        assert_eq!(err.value, 0.0);
        let err = exprel_n(5, 740.0_f64).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Overflow);
    }
}
