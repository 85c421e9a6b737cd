//! Status and error types shared by every evaluator.

use core::fmt;

use crate::machine::SfFloat;

/// Kind of failure reported by an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument outside the function's domain (e.g. negative order).
    Domain,
    /// Result magnitude exceeds the representable range.
    Overflow,
    /// Result magnitude is below the representable range.
    Underflow,
    /// Iterative algorithm hit its iteration cap before converging.
    MaxIterations,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Domain => write!(f, "domain error: argument outside the function's domain"),
            ErrorKind::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            ErrorKind::Underflow => {
                write!(f, "underflow: result magnitude below representable range")
            }
            ErrorKind::MaxIterations => {
                write!(f, "iteration limit exceeded: algorithm did not converge")
            }
        }
    }
}

impl core::error::Error for ErrorKind {}

/// Failure of an evaluation, with the value reported in its place.
///
/// `value` is 0.0 for [`ErrorKind::Domain`], [`ErrorKind::Overflow`] and
/// [`ErrorKind::Underflow`]. For [`ErrorKind::MaxIterations`] it holds the
/// last estimate, which is usually still usable at reduced accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Error<T> {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Sentinel or best-effort value.
    pub value: T,
}

impl<T: SfFloat> Error<T> {
    #[inline]
    pub(crate) fn domain() -> Self {
        Error {
            kind: ErrorKind::Domain,
            value: T::zero(),
        }
    }

    #[inline]
    pub(crate) fn overflow() -> Self {
        Error {
            kind: ErrorKind::Overflow,
            value: T::zero(),
        }
    }

    #[inline]
    pub(crate) fn underflow() -> Self {
        Error {
            kind: ErrorKind::Underflow,
            value: T::zero(),
        }
    }

    #[inline]
    pub(crate) fn max_iterations(estimate: T) -> Self {
        Error {
            kind: ErrorKind::MaxIterations,
            value: estimate,
        }
    }
}

impl<T> fmt::Display for Error<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl<T: fmt::Debug> core::error::Error for Error<T> {}

/// Outcome of an evaluation: the value, or an [`Error`] carrying its sentinel.
pub type SfResult<T> = Result<T, Error<T>>;
