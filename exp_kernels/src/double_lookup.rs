//! Two-stage table reduction.
//!
//! The input is first reduced at unit steps, then the residual is reduced
//! again at 1/16 steps. Two small tables (16 + 17 entries) replace the single
//! 256 entry table of [`exp_taylor_2`](crate::exp_taylor_2) for the same
//! residual range, at the cost of a second lookup and multiplication.

use crate::CUTOFF;
use crate::grid::{EXP_UNIT, EXP_UNIT_FRACTION, Reduced};
use crate::series::power_sum_exp;

/// `exp(-k1) * exp(-k2 / 16) * exp(r)` with a degree 2 series for the last factor.
///
/// Max abs error on `[-16, 0]` is about 4.0e-5.
pub fn exp_double_lookup(n: f32) -> f32 {
    if n <= CUTOFF {
        return 0.0;
    }

    let Reduced {
        index: whole,
        residual,
    } = EXP_UNIT.reduce(n);
    let Reduced {
        index: fraction,
        residual,
    } = EXP_UNIT_FRACTION.reduce(residual);

    EXP_UNIT.get(whole) * EXP_UNIT_FRACTION.get(fraction) * power_sum_exp::<2>(residual)
}
