use super::Generate;
use super::Sample;
use super::CLASSIFICATION_SAMPLES;
use crate::random::RandomSource as _;
use rand::Rng;
use std::f64::consts::PI;

/// Two interleaved spirals, the negative one rotated by half a turn.
///
/// Each spiral has `sample_count / 2` points evenly spaced along 1.75 turns,
/// with a radius growing from 0 to 5.  Noise jitters each coordinate by up to
/// `noise` in both directions.
pub fn spiral<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    tracing::debug!(sample_count, noise, "generating spiral");

    let n = sample_count / 2;
    let mut samples = Vec::with_capacity(2 * n);
    for (delta_t, label) in [(0.0, 1.0), (PI, -1.0)] {
        for i in 0..n {
            let i = i as f64;
            let n = n as f64;
            let r = i / n * 5.0;
            let t = 1.75 * i / n * 2.0 * PI + delta_t;
            let x = r * f64::sin(t) + rng.uniform(-1.0, 1.0) * noise;
            let y = r * f64::cos(t) + rng.uniform(-1.0, 1.0) * noise;
            samples.push(Sample::new(x, y, label));
        }
    }
    samples
}

#[derive(Debug, Clone, Copy)]
pub struct Spiral {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for Spiral {
    fn default() -> Self {
        Self {
            sample_count: CLASSIFICATION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for Spiral {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        spiral(self.sample_count, self.noise, rng)
    }
}
