//! Small numeric helpers shared by the evaluators.

use crate::machine::SfFloat;

/// Sign of `s` as ±1, with `+1` for zero (and for `+0.0`/`-0.0` alike).
#[inline]
pub(crate) fn sign<T: SfFloat>(s: T) -> T {
    if s >= T::zero() {
        T::one()
    } else {
        -T::one()
    }
}

/// Truncated Taylor ladder `1 + x/k·(1 + x/(k+1)·(… (1 + x/last)))`.
///
/// Evaluated innermost-first, so `first..=last` are the denominators from
/// the outside in. With `first = 2, last = 5` this is the series of
/// `(e^x - 1)/x`; with `first = 3, last = 6` the series of
/// `2 (e^x - 1 - x)/x^2`.
#[inline]
pub(crate) fn nested_series<T: SfFloat>(x: T, first: i32, last: i32) -> T {
    let one = T::one();
    let mut acc = one;
    let mut k = last;
    while k >= first {
        acc = one + x / T::from_i32(k) * acc;
        k -= 1;
    }
    acc
}
