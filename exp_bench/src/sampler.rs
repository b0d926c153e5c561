use rand::RngCore;

/// Draws inputs uniformly from `[-width, 0]` by scaling a raw 32-bit draw.
#[derive(Clone, Debug)]
pub struct InputSampler<R: RngCore> {
    rng: R,
    scale: f32,
}

impl<R: RngCore> InputSampler<R> {
    pub fn new(rng: R, width: f32) -> Self {
        Self {
            rng,
            scale: width / 4_294_967_296.0,
        }
    }

    #[inline]
    pub fn next_input(&mut self) -> f32 {
        -(self.rng.next_u32() as f32 * self.scale)
    }
}
