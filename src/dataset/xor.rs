use super::Generate;
use super::Sample;
use super::CLASSIFICATION_SAMPLES;
use crate::random::RandomSource as _;
use rand::Rng;

/// Distance points are pushed away from both axes.
const PADDING: f64 = 0.3;

fn pad(v: f64) -> f64 {
    if v > 0.0 {
        v + PADDING
    } else {
        v - PADDING
    }
}

fn xor_label(x: f64, y: f64) -> f64 {
    if x * y >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Points spread uniformly over `[-5.3, 5.3]²` minus a band around each axis,
/// labeled by the sign of `x * y`.
///
/// Noise perturbs the point the label is computed from.  The stored
/// coordinates are never perturbed, so with noise some samples carry the
/// label of a neighboring quadrant.
pub fn xor<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    tracing::debug!(sample_count, noise, "generating xor");

    (0..sample_count)
        .map(|_| {
            let x = pad(rng.uniform(-5.0, 5.0));
            let y = pad(rng.uniform(-5.0, 5.0));
            let noise_x = rng.uniform(-5.0, 5.0) * noise;
            let noise_y = rng.uniform(-5.0, 5.0) * noise;
            let label = xor_label(x + noise_x, y + noise_y);
            Sample::new(x, y, label)
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct Xor {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for Xor {
    fn default() -> Self {
        Self {
            sample_count: CLASSIFICATION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for Xor {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        xor(self.sample_count, self.noise, rng)
    }
}
