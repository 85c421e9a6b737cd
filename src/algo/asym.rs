//! Large-argument expansions of exprel_n.
//!
//! All three branches start from
//!
//! ```text
//! exprel_n(x) = e^x n! / x^n (1 - Γ(n, x) / Γ(n))
//! ```
//!
//! and, for integer n, the terminating expansion
//! Γ(n, x) = x^(n-1) e^(-x) Σ_{k<n} (n-1)!/(n-1-k)! x^(-k).

use crate::algo::gamma::{ln_factorial, ln_gamma};
use crate::elementary;
use crate::machine::SfFloat;
use crate::types::{Error, SfResult};

/// Σ_{k=0}^{n-1} t_k with t_0 = 1, t_k = t_{k-1} (n - k) / x.
pub(crate) fn gamma_tail_sum<T: SfFloat>(n: i32, x: T) -> T {
    let mut term = T::one();
    let mut sum = T::one();
    for k in 1..n {
        term = term * T::from_i32(n - k) / x;
        sum = sum + term;
    }
    sum
}

/// ln(e^x n! / x^n).
#[inline]
fn ln_prefactor<T: SfFloat>(n: i32, x: T) -> T {
    x + ln_factorial::<T>(n.unsigned_abs()) - T::from_i32(n) * x.ln()
}

/// x > 12 n: the polynomial part is negligible, exprel_n(x) ≈ e^x n!/x^n.
///
/// Overflow and underflow come from the final exponentiation. At x = +inf
/// the logarithm is inf - inf, reported as overflow.
pub(crate) fn large_positive<T: SfFloat>(n: i32, x: T) -> SfResult<T> {
    let lnpre = ln_prefactor(n, x);
    if lnpre.is_nan() {
        return Err(Error::overflow());
    }
    elementary::exp(lnpre)
}

/// n < x <= 12 n: prefactor times the incomplete-gamma correction.
pub(crate) fn moderate_positive<T: SfFloat>(n: i32, x: T) -> SfResult<T> {
    let one = T::one();
    let nf = T::from_i32(n);

    let lnpre = ln_prefactor(n, x);
    if lnpre.is_nan() || lnpre >= T::log_max() - T::from_f64(5.0) {
        return Err(Error::overflow());
    }

    // x^(n-1) e^(-x) / Γ(n), kept in log space so that large n cannot
    // produce inf * 0.
    let ln_tail = -x + (nf - one) * x.ln() - ln_gamma(nf)?;
    let sum = gamma_tail_sum(n, x);
    Ok(lnpre.exp() * (one - ln_tail.exp() * sum))
}

/// x <= -10 n: e^x n!/x^n vanishes and only the polynomial part survives.
pub(crate) fn large_negative<T: SfFloat>(n: i32, x: T) -> T {
    -(T::from_i32(n) / x) * gamma_tail_sum(n, x)
}
