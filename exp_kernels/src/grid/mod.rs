//! Grid tables and range reduction.
//!
//! A [`GridTable`] stores `exp(-i / scale)` for consecutive `i`. Reducing an
//! input against it yields the index of the nearest grid point at or above the
//! input and a residual in `(-1 / scale, 0]`, so that
//! `exp(n) == table[index] * exp(residual)`.
//!
//! The tables are generated by the build script and live in read-only statics.

include!(concat!(env!("OUT_DIR"), "/exp_tables.rs"));


/// Precomputed `exp(-i / scale)` for `i` in `0..N`.
#[derive(Debug)]
pub struct GridTable<const N: usize> {
    scale: f32,
    inv_scale: f32,
    values: [f32; N],
}

/// An input split into a grid index and the residual left over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reduced {
    pub index: usize,
    pub residual: f32,
}

impl<const N: usize> GridTable<N> {
    /// `scale` is the number of grid steps per unit and must be a power of two,
    /// which keeps `n * scale` and `k / scale` exact.
    pub const fn new(scale: f32, values: [f32; N]) -> Self {
        Self {
            scale,
            inv_scale: 1.0 / scale,
            values,
        }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    #[inline(always)]
    pub const fn values(&self) -> &[f32; N] {
        &self.values
    }

    /// The argument whose exponential is stored at `index`.
    #[inline(always)]
    pub fn argument(&self, index: usize) -> f32 {
        -(index as f32) * self.inv_scale
    }

    /// Returns `exp(-index / scale)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> f32 {
        self.values[index]
    }

    /// Splits `n` into `-index / scale + residual` with `residual` in `(-1 / scale, 0]`.
    ///
    /// For `n` in `(-N / scale, 0]` the index is always within the table. The
    /// float to index conversion saturates, so positive inputs map to index 0
    /// and NaN maps to index 0 with a NaN residual.
    #[inline(always)]
    pub fn reduce(&self, n: f32) -> Reduced {
        let k = -(n * self.scale).ceil();
        Reduced {
            index: k as usize,
            residual: n + k * self.inv_scale,
        }
    }
}
