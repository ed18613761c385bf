// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::clock::Millis;

pub const RANDOM_STEPS: u8 = 10;

pub trait RandomSource {
    /// Uniform value in `[0, steps)`. Must return 0 when `steps` is 0.
    fn next(&mut self, steps: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self, steps: u8) -> u8 {
        (**self).next(steps)
    }
}

#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self, steps: u8) -> u8 {
        if steps == 0 {
            return 0;
        }
        self.rng.random_range(0..steps)
    }
}

/// `min + draw * (max - min) / steps`, floored. `max` itself is never
/// produced and an inverted range collapses to `min`.
pub fn rand_range<R: RandomSource + ?Sized>(
    rng: &mut R,
    min: Millis,
    max: Millis,
    steps: u8,
) -> Millis {
    if steps == 0 {
        return min;
    }
    let draw = u64::from(rng.next(steps).min(steps - 1));
    let span = u64::from(max.saturating_sub(min));
    // draw < steps, so the offset is < span and fits back into Millis.
    min + (draw * span / u64::from(steps)) as Millis
}
