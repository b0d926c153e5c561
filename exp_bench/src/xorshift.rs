//! Marsaglia's xorshift128 generator.
//!
//! Fast enough that drawing an input costs little next to the kernels being
//! timed, and deterministic for a given state so every kernel sees the same
//! input sequence.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    pub const fn new() -> Self {
        Self {
            x: 1,
            y: 0,
            z: 0,
            w: 0,
        }
    }
}

impl Default for Xorshift128 {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for Xorshift128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Xorshift128 {
    type Seed = [u8; 16];

    /// Little-endian `x, y, z, w`. The all-zero state is a fixed point of
    /// the generator, so an all-zero seed yields the default state.
    fn from_seed(seed: Self::Seed) -> Self {
        let word = |i: usize| u32::from_le_bytes([seed[i], seed[i + 1], seed[i + 2], seed[i + 3]]);
        let rng = Self {
            x: word(0),
            y: word(4),
            z: word(8),
            w: word(12),
        };
        if rng == (Self { x: 0, y: 0, z: 0, w: 0 }) {
            Self::new()
        } else {
            rng
        }
    }
}
