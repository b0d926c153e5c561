//! Max absolute error of a kernel against the `f64` exponential.

use std::ops::Range;

use rand::RngCore;
use serde::Serialize;

use crate::sampler::InputSampler;

/// Bit patterns of every `f32` in `[-16, -0]`: `-0.0` is `0x8000_0000` and
/// `-16.0` is `0xC180_0000`.
pub const NEGATIVE_DOMAIN_BITS: Range<u32> = 0x8000_0000..0xC180_0001;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ErrorStats {
    pub max_abs_error: f64,
    /// Input that produced `max_abs_error`.
    pub worst_input: f32,
    pub samples: u64,
}

impl ErrorStats {
    #[inline]
    fn record(&mut self, f: fn(f32) -> f32, x: f32) {
        let err = (f(x) as f64 - (x as f64).exp()).abs();
        // NaN errors count as the worst possible.
        if err > self.max_abs_error || (err.is_nan() && !self.max_abs_error.is_nan()) {
            self.max_abs_error = err;
            self.worst_input = x;
        }
        self.samples += 1;
    }

    /// Combines two partial results; ties keep `self`.
    pub fn merge(self, other: Self) -> Self {
        let worst = if other.max_abs_error > self.max_abs_error
            || (other.max_abs_error.is_nan() && !self.max_abs_error.is_nan())
        {
            other
        } else {
            self
        };
        Self {
            samples: self.samples + other.samples,
            ..worst
        }
    }
}

/// Evaluates `f` on `samples` inputs drawn from `sampler`.
pub fn random_scan<R: RngCore>(
    f: fn(f32) -> f32,
    sampler: &mut InputSampler<R>,
    samples: u64,
) -> ErrorStats {
    let mut stats = ErrorStats::default();
    for _ in 0..samples {
        stats.record(f, sampler.next_input());
    }
    stats
}

/// Evaluates `f` on every `f32` whose bit pattern lies in `bits`, in parallel.
pub fn exhaustive_scan(f: fn(f32) -> f32, bits: Range<u32>) -> ErrorStats {
    common::parallel::par_fold_range(
        bits,
        ErrorStats::default(),
        |chunk| {
            let mut stats = ErrorStats::default();
            for bits in chunk {
                stats.record(f, f32::from_bits(bits));
            }
            stats
        },
        ErrorStats::merge,
    )
}
