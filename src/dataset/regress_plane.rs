use super::Generate;
use super::Sample;
use super::REGRESSION_SAMPLES;
use crate::random::RandomSource as _;
use crate::LinearScale;
use rand::Rng;

const RADIUS: f64 = 6.0;

/// Points spread uniformly over `[-6, 6]²`, labeled by `x + y` rescaled from
/// `[-10, 10]` to `[-1, 1]`.
///
/// Noise perturbs the point the label is computed from, not the stored
/// coordinates.  Labels are not clamped: corners of the square map slightly
/// outside of `[-1, 1]`.
pub fn regress_plane<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    tracing::debug!(sample_count, noise, "generating plane regression");

    let label_scale = LinearScale::new([-10.0, 10.0], [-1.0, 1.0]);
    (0..sample_count)
        .map(|_| {
            let x = rng.uniform(-RADIUS, RADIUS);
            let y = rng.uniform(-RADIUS, RADIUS);
            let noise_x = rng.uniform(-RADIUS, RADIUS) * noise;
            let noise_y = rng.uniform(-RADIUS, RADIUS) * noise;
            let label = label_scale.scale((x + noise_x) + (y + noise_y));
            Sample::new(x, y, label)
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct RegressPlane {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for RegressPlane {
    fn default() -> Self {
        Self {
            sample_count: REGRESSION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for RegressPlane {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        regress_plane(self.sample_count, self.noise, rng)
    }
}
