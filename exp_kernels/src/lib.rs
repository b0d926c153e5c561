//! Fast approximations of `exp(x)` for non-positive `f32` inputs.
//!
//! Every kernel is a pure `fn(f32) -> f32` and trades accuracy for speed in a
//! different way:
//!
//! - [`taylor`]: range reduction against a grid table, then a truncated
//!   Maclaurin series on the residual.
//! - [`rational`]: the same reduction followed by a Padé approximant.
//! - [`double_lookup`]: two table lookups at unit and 1/16 granularity with a
//!   short series on what is left.
//! - [`bits`]: builds `2^p` directly in the IEEE-754 bit layout.
//!
//! # Domain
//!
//! Inputs are expected in `(-inf, 0]`. The table-based kernels return exactly
//! `0.0` for `x <= -16`, where `exp(x) < 1.2e-7` vanishes next to `1.0` in
//! `f32`. Positive inputs are not supported: results for them are unspecified,
//! but no kernel panics on any input, NaN and infinities included.
//!
//! # Quick Start
//!
//! ```
//! use exp_kernels::{KERNELS, exp_taylor_3};
//!
//! let y = exp_taylor_3(-0.5);
//! assert!((y - (-0.5f32).exp()).abs() < 1e-6);
//!
//! for kernel in &KERNELS {
//!     let y = kernel.eval(-1.0);
//!     assert!((y - (-1.0f32).exp()).abs() <= kernel.max_abs_error);
//! }
//! ```

pub mod bits;
pub mod double_lookup;
pub mod grid;
pub mod kernel;
pub mod rational;
pub mod series;
pub mod taylor;

pub use bits::{fasterexp, fasterpow2, fastexp, fastpow2};
pub use double_lookup::exp_double_lookup;
pub use grid::{GridTable, Reduced};
pub use kernel::{Family, KERNELS, Kernel, find};
pub use rational::{exp_rational_1, exp_rational_2};
pub use taylor::{
    exp_taylor_1, exp_taylor_1_unrolled, exp_taylor_2, exp_taylor_3, exp_taylor_4, exp_taylor_4a,
};

/// Inputs at or below this value make the table-based kernels return `0.0`.
pub const CUTOFF: f32 = -16.0;

#[cfg(test)]
pub(crate) mod testing;
