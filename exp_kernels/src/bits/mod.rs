//! Exponentials assembled directly in the IEEE-754 bit layout.
//!
//! For `2^p` the integer part of `p` belongs in the exponent field and the
//! fractional part in the mantissa. Scaling `p + 127` by `2^23` and
//! reinterpreting the integer as an `f32` does both at once; the constants
//! below correct the mantissa so that the piecewise-linear result tracks the
//! true curve.
//!
//! These are Paul Mineiro's `fastapprox` functions. Unlike the table kernels
//! they have no cutoff: inputs below `-126 / log2(e)` clamp to the smallest
//! normal float instead of returning zero.

use std::f32::consts::LOG2_E;

#[cfg(test)]
mod bench;

/// Exponents below this are clamped; `2^-126` is the smallest normal `f32`.
pub const MIN_EXPONENT: f32 = -126.0;

const MANTISSA_SCALE: f32 = (1u32 << 23) as f32;

/// `2^p` with a rational correction of the mantissa. Relative error is below
/// 1e-4 over the normal range.
#[allow(clippy::excessive_precision)]
pub fn fastpow2(p: f32) -> f32 {
    let offset = if p < 0.0 { 1.0 } else { 0.0 };
    let clipp = if p < MIN_EXPONENT { MIN_EXPONENT } else { p };
    let w = clipp as i32;
    let z = clipp - w as f32 + offset;
    let bits = MANTISSA_SCALE
        * (clipp + 121.2740575 + 27.7280233 / (4.84252568 - z) - 1.49012907 * z);
    // Saturating cast: NaN and negative products become 0.
    f32::from_bits(bits as u32)
}

/// `2^p` with a linear mantissa, i.e. a single multiply-add. Relative error
/// is about 4%.
#[allow(clippy::excessive_precision)]
pub fn fasterpow2(p: f32) -> f32 {
    let clipp = if p < MIN_EXPONENT { MIN_EXPONENT } else { p };
    let bits = MANTISSA_SCALE * (clipp + 126.94269504);
    f32::from_bits(bits as u32)
}

/// `exp(p)` as `fastpow2(p * log2(e))`.
///
/// Max abs error on `[-16, 0]` is about 4.2e-5.
pub fn fastexp(p: f32) -> f32 {
    fastpow2(LOG2_E * p)
}

/// `exp(p)` as `fasterpow2(p * log2(e))`.
///
/// Max abs error on `[-16, 0]` is about 2.9e-2.
pub fn fasterexp(p: f32) -> f32 {
    fasterpow2(LOG2_E * p)
}
