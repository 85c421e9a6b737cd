//! Continued fraction for exprel_n.
//!
//! Abramowitz & Stegun 4.2.41, evaluated by forward recurrence on the
//! numerators A_k and denominators B_k of the convergents:
//!
//! ```text
//! A_k = b_k A_{k-1} + a_k A_{k-2}
//! B_k = b_k B_{k-1} + a_k B_{k-2}
//! ```
//!
//! with a_1 = 1, b_1 = 1, a_2 = -x, b_2 = n + 1 and, for k >= 3,
//! a_k = ((k - 1) / 2) x for odd k, a_k = -(n + k/2 - 1) x for even k,
//! b_k = n + k - 1.

use crate::machine::SfFloat;
use crate::types::{Error, SfResult};

/// Iteration cap, counting the two seed steps.
pub(crate) const MAX_ITER: i32 = 5000;

/// The two most recent convergents, A_{k-1}/B_{k-1} and A_k/B_k.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Convergents<T> {
    a_prev: T,
    b_prev: T,
    a: T,
    b: T,
}

impl<T: SfFloat> Convergents<T> {
    /// A_{-1} = 1, B_{-1} = 0, A_0 = 0, B_0 = 1.
    fn new() -> Self {
        Convergents {
            a_prev: T::one(),
            b_prev: T::zero(),
            a: T::zero(),
            b: T::one(),
        }
    }

    /// Advance one term with partial numerator `an` and denominator `bn`.
    #[inline]
    fn step(self, an: T, bn: T) -> Self {
        Convergents {
            a_prev: self.a,
            b_prev: self.b,
            a: bn * self.a + an * self.a_prev,
            b: bn * self.b + an * self.b_prev,
        }
    }

    /// Divide every accumulator by `big` once the current pair exceeds it.
    /// The recurrence is linear, so the ratios are unchanged.
    #[inline]
    fn rescaled(self, big: T) -> Self {
        if self.a.abs() > big || self.b.abs() > big {
            Convergents {
                a_prev: self.a_prev / big,
                b_prev: self.b_prev / big,
                a: self.a / big,
                b: self.b / big,
            }
        } else {
            self
        }
    }

    #[inline]
    fn value(&self) -> T {
        self.a / self.b
    }
}

/// exprel_n(x) by continued fraction.
///
/// Converges for all x but slowly for large positive x; the dispatcher only
/// sends `-10 n < x <= n` here. Stops once successive convergents agree to
/// ten machine epsilons. After [`MAX_ITER`] terms the last convergent is
/// returned inside an [`ErrorKind::MaxIterations`](crate::ErrorKind) error.
pub(crate) fn exprel_n_cf<T: SfFloat>(n: i32, x: T) -> SfResult<T> {
    capped_cf(n, x, MAX_ITER)
}

/// Body of [`exprel_n_cf`] with an explicit term cap. Convergence on term
/// `max_iter` itself still counts as success.
fn capped_cf<T: SfFloat>(n: i32, x: T, max_iter: i32) -> SfResult<T> {
    let one = T::one();
    let nf = T::from_i32(n);
    let big = T::sqrt_max();
    let tol = T::from_f64(10.0) * T::MACH_EPSILON;

    let mut state = Convergents::new().step(one, one).step(-x, nf + one);
    let mut f = state.value();

    for k in 3..=max_iter {
        let an = if k % 2 == 1 {
            T::from_i32((k - 1) / 2) * x
        } else {
            -(nf + T::from_i32(k / 2) - one) * x
        };
        let bn = nf + T::from_i32(k - 1);

        state = state.step(an, bn).rescaled(big);

        let prev = f;
        f = state.value();
        if (prev / f - one).abs() < tol {
            log::trace!("exprel_n continued fraction: n={n}, x={x:?}, converged after {k} terms");
            return Ok(f);
        }
    }

    log::debug!("exprel_n continued fraction: n={n}, x={x:?}, no convergence in {max_iter} terms");
    Err(Error::max_iterations(f))
}
