//! Log-gamma and log-factorial.
//!
//! Integer arguments up to 100 come from a table of ln(n!); everything else
//! goes through Stirling's series, shifting the argument upward first when
//! it is too small for the series to converge to working precision.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

use crate::machine::SfFloat;
use crate::types::{Error, SfResult};

/// ln(2π).
const LN_2PI: f64 = 1.83787706640934548;

/// log10(2), used to turn mantissa bits into decimal digits.
const LOG10_2: f64 = 0.30102999566398120;

/// ln(n!) for n = 0, 1, ..., 99. Equivalently ln Γ(n + 1).
#[rustfmt::skip]
const LN_FACTORIAL: [f64; 100] = [
    /*  0 */ 0.00000000000000000e+00, 0.00000000000000000e+00, 6.93147180559945309e-01, 1.79175946922805500e+00,
    /*  4 */ 3.17805383034794562e+00, 4.78749174278204599e+00, 6.57925121201010100e+00, 8.52516136106541430e+00,
    /*  8 */ 1.06046029027452502e+01, 1.28018274800814696e+01, 1.51044125730755153e+01, 1.75023078458738858e+01,
    /* 12 */ 1.99872144956618861e+01, 2.25521638531234229e+01, 2.51912211827386815e+01, 2.78992713838408916e+01,
    /* 16 */ 3.06718601060806728e+01, 3.35050734501368889e+01, 3.63954452080330536e+01, 3.93398841871994940e+01,
    /* 20 */ 4.23356164607534850e+01, 4.53801388984769080e+01, 4.84711813518352239e+01, 5.16066755677643736e+01,
    /* 24 */ 5.47847293981123192e+01, 5.80036052229805199e+01, 6.12617017610020020e+01, 6.45575386270063311e+01,
    /* 28 */ 6.78897431371815350e+01, 7.12570389671680090e+01, 7.46582363488301644e+01, 7.80922235533153106e+01,
    /* 32 */ 8.15579594561150372e+01, 8.50544670175815174e+01, 8.85808275421976788e+01, 9.21361756036870925e+01,
    /* 36 */ 9.57196945421432025e+01, 9.93306124547874269e+01, 1.02968198614513813e+02, 1.06631760260643459e+02,
    /* 40 */ 1.10320639714757395e+02, 1.14034211781461703e+02, 1.17771881399745072e+02, 1.21533081515438634e+02,
    /* 44 */ 1.25317271149356895e+02, 1.29123933639127215e+02, 1.32952575035616310e+02, 1.36802722637326368e+02,
    /* 48 */ 1.40673923648234259e+02, 1.44565743946344886e+02, 1.48477766951773032e+02, 1.52409592584497358e+02,
    /* 52 */ 1.56360836303078785e+02, 1.60331128216630907e+02, 1.64320112263195181e+02, 1.68327445448427652e+02,
    /* 56 */ 1.72352797139162802e+02, 1.76395848406997352e+02, 1.80456291417543771e+02, 1.84533828861449491e+02,
    /* 60 */ 1.88628173423671591e+02, 1.92739047287844902e+02, 1.96866181672889994e+02, 2.01009316399281527e+02,
    /* 64 */ 2.05168199482641199e+02, 2.09342586752536836e+02, 2.13532241494563261e+02, 2.17736934113954227e+02,
    /* 68 */ 2.21956441819130334e+02, 2.26190548323727593e+02, 2.30439043565776952e+02, 2.34701723442818268e+02,
    /* 72 */ 2.38978389561834323e+02, 2.43268849002982714e+02, 2.47572914096186884e+02, 2.51890402209723194e+02,
    /* 76 */ 2.56221135550009525e+02, 2.60564940971863209e+02, 2.64921649798552801e+02, 2.69291097651019823e+02,
    /* 80 */ 2.73673124285693704e+02, 2.78067573440366143e+02, 2.82474292687630396e+02, 2.86893133295426994e+02,
    /* 84 */ 2.91323950094270308e+02, 2.95766601350760624e+02, 3.00220948647014132e+02, 3.04686856765668715e+02,
    /* 88 */ 3.09164193580146922e+02, 3.13652829949879062e+02, 3.18152639620209327e+02, 3.22663499126726177e+02,
    /* 92 */ 3.27185287703775217e+02, 3.31717887196928473e+02, 3.36261181979198477e+02, 3.40815058870799018e+02,
    /* 96 */ 3.45379407062266854e+02, 3.49954118040770237e+02, 3.54539085519440809e+02, 3.59134205369575399e+02,
];

/// Stirling series coefficients B_{2k} / (2k (2k - 1)), k = 1..=22.
#[rustfmt::skip]
const STIRLING: [f64; 22] = [
     8.33333333333333333e-02, -2.77777777777777778e-03,
     7.93650793650793651e-04, -5.95238095238095238e-04,
     8.41750841750841751e-04, -1.91752691752691753e-03,
     6.41025641025641026e-03, -2.95506535947712418e-02,
     1.79644372368830573e-01, -1.39243221690590112e+00,
     1.34028640441683920e+01, -1.56848284626002017e+02,
     2.19310333333333333e+03, -3.61087712537249894e+04,
     6.91472268851313067e+05, -1.52382215394074162e+07,
     3.82900751391414141e+08, -1.08822660357843911e+10,
     3.47320283765002252e+11, -1.23696021422692745e+13,
     4.88788064793079335e+14, -2.13203339609193739e+16,
];

/// ln(n!) for any non-negative integer `n`.
pub(crate) fn ln_factorial<T: SfFloat>(n: u32) -> T {
    match LN_FACTORIAL.get(n as usize) {
        Some(&v) => T::from_f64(v),
        None => stirling(T::from_f64(f64::from(n)) + T::one()),
    }
}

/// ln Γ(x) for x > 0.
///
/// Returns a domain error for `x <= 0` and for NaN.
pub(crate) fn ln_gamma<T: SfFloat>(x: T) -> SfResult<T> {
    if x.is_nan() || x <= T::zero() {
        return Err(Error::domain());
    }

    if x == x.floor() && x <= T::from_f64(100.0) {
        if let Some(k) = x.to_usize() {
            return Ok(T::from_f64(LN_FACTORIAL[k - 1]));
        }
    }

    Ok(stirling(x))
}

/// Stirling's series for ln Γ(z), z > 0.
///
/// ln Γ(z) = z (ln z - 1) + (ln 2π - ln z) / 2 + Σ c_k z^{1-2k}
///
/// Below `zmin` the argument is pushed up with Γ(z + 1) = z Γ(z) and the
/// accumulated product is divided back out at the end.
fn stirling<T: SfFloat>(z: T) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);

    let wdtol = (T::from_f64(2.0) * T::MACH_EPSILON).max(T::from_f64(0.5e-18));

    // Decimal digits of precision, clamped to [3, 20], set the threshold
    // above which the series reaches wdtol without recursion.
    let digits = T::from_f64(LOG10_2) * T::from_i32(T::MACH_DIGITS);
    let fln = digits.min(T::from_f64(20.0)).max(T::from_f64(3.0)) - T::from_f64(3.0);
    let zmin = (T::from_f64(1.8) + T::from_f64(0.3875) * fln).floor() + one;

    let mut zs = z;
    let mut product = one;
    while zs < zmin {
        product = product * zs;
        zs = zs + one;
    }

    let rz = one / zs;
    let lead = T::from_f64(STIRLING[0]) * rz;
    let mut s = lead;
    if rz >= wdtol {
        let rz2 = rz * rz;
        let cutoff = lead * wdtol;
        let mut zp = rz;
        for &c in &STIRLING[1..] {
            zp = zp * rz2;
            let term = T::from_f64(c) * zp;
            if term.abs() < cutoff {
                break;
            }
            s = s + term;
        }
    }

    let lz = zs.ln();
    zs * (lz - one) - product.ln() + half * (T::from_f64(LN_2PI) - lz) + s
}
