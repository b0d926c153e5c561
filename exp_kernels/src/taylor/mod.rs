//! Range reduction + Taylor series.
//!
//! `exp(n) = exp(-k / scale) * exp(r)` with `r` in `(-1 / scale, 0]`. The first
//! factor comes from a grid table, the second from a short series. A finer
//! table shrinks `r`, which lets a lower degree reach the same error.
//!
//! | kernel | table step | series | max abs error on [-16, 0] |
//! |---|---|---|---|
//! | [`exp_taylor_1`] | 1 | Horner, degree 5 | 1.2e-3 |
//! | [`exp_taylor_1_unrolled`] | 1 | power sum, degree 5 | 1.2e-3 |
//! | [`exp_taylor_2`] | 1/16 | power sum, degree 2 | 4.0e-5 |
//! | [`exp_taylor_3`] | 1/64 | power sum, degree 3 | 1.2e-7 |
//! | [`exp_taylor_4`] | 1/256 | power sum, degree 3 | 1.1e-7 |
//! | [`exp_taylor_4a`] | 1/256 | none | 3.8e-3 |

use crate::CUTOFF;
use crate::grid::{EXP_64TH, EXP_256TH, EXP_SIXTEENTH, EXP_UNIT, GridTable, Reduced};
use crate::series::{horner_exp, power_sum_exp};

#[cfg(test)]
mod bench;

#[inline(always)]
fn table_times_series<const N: usize>(n: f32, table: &GridTable<N>, series: fn(f32) -> f32) -> f32 {
    if n <= CUTOFF {
        return 0.0;
    }

    let Reduced { index, residual } = table.reduce(n);
    table.get(index) * series(residual)
}

/// Unit table and a degree 5 series evaluated with Horner's scheme in `f64`.
pub fn exp_taylor_1(n: f32) -> f32 {
    table_times_series(n, &EXP_UNIT, horner_exp::<5>)
}

/// Same table and degree as [`exp_taylor_1`], with the series written as a sum
/// of independent powers.
pub fn exp_taylor_1_unrolled(n: f32) -> f32 {
    table_times_series(n, &EXP_UNIT, power_sum_exp::<5>)
}

pub fn exp_taylor_2(n: f32) -> f32 {
    table_times_series(n, &EXP_SIXTEENTH, power_sum_exp::<2>)
}

pub fn exp_taylor_3(n: f32) -> f32 {
    table_times_series(n, &EXP_64TH, power_sum_exp::<3>)
}

pub fn exp_taylor_4(n: f32) -> f32 {
    table_times_series(n, &EXP_256TH, power_sum_exp::<3>)
}

/// Plain table lookup: the residual is dropped, so the result is the table
/// value at the grid point just above `n`.
pub fn exp_taylor_4a(n: f32) -> f32 {
    table_times_series(n, &EXP_256TH, power_sum_exp::<0>)
}
