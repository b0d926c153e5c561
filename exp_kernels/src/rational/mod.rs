//! Range reduction + Padé approximants.
//!
//! After reduction the residual is halved and `exp(2r)` is approximated by a
//! ratio of two polynomials symmetric in `r`. A rational function of a given
//! degree is accurate to a higher order than a polynomial with the same number
//! of multiplications, at the price of one division.

use crate::CUTOFF;
use crate::grid::{EXP_SIXTEENTH, EXP_UNIT, Reduced};

#[cfg(test)]
mod bench;

const THIRD: f32 = 1.0 / 3.0;

/// Unit table with the [2/2] approximant `(1 + r + r²/3) / (1 - r + r²/3)`.
///
/// Max abs error on `[-16, 0]` is about 5.4e-4.
pub fn exp_rational_1(n: f32) -> f32 {
    if n <= CUTOFF {
        return 0.0;
    }

    let Reduced { index, residual } = EXP_UNIT.reduce(n);
    let r = residual * 0.5;
    let r2 = r * r * THIRD;
    EXP_UNIT.get(index) * (1.0 + r + r2) / (1.0 - r + r2)
}

/// 1/16 table with the [1/1] approximant `(1 + r) / (1 - r)`.
///
/// Max abs error on `[-16, 0]` is about 1.9e-5.
pub fn exp_rational_2(n: f32) -> f32 {
    if n <= CUTOFF {
        return 0.0;
    }

    let Reduced { index, residual } = EXP_SIXTEENTH.reduce(n);
    let r = residual * 0.5;
    EXP_SIXTEENTH.get(index) * (1.0 + r) / (1.0 - r)
}
