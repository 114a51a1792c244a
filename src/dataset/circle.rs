use super::Generate;
use super::Sample;
use super::CLASSIFICATION_SAMPLES;
use crate::random::RandomSource as _;
use crate::Point2D;
use rand::Rng;
use std::f64::consts::PI;

const RADIUS: f64 = 5.0;

/// Positive inside the circle of radius `RADIUS / 2`, negative outside.
fn circle_label(p: Point2D) -> f64 {
    if p.norm() < RADIUS * 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// A disk of positive points surrounded by a ring of negative points.
///
/// Half of the samples are drawn in the disk of radius 2.5, the other half in
/// the ring between radii 3.5 and 5.  Labels are decided from the point
/// perturbed by noise, so a high noise level can label a disk point negative
/// and a ring point positive.
pub fn circle<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    tracing::debug!(sample_count, noise, "generating circle");

    let half = sample_count / 2;
    let mut samples = Vec::with_capacity(2 * half);
    for (r_min, r_max) in [(0.0, RADIUS * 0.5), (RADIUS * 0.7, RADIUS)] {
        for _ in 0..half {
            let r = rng.uniform(r_min, r_max);
            let angle = rng.uniform(0.0, 2.0 * PI);
            let x = r * f64::sin(angle);
            let y = r * f64::cos(angle);
            let noise_x = rng.uniform(-RADIUS, RADIUS) * noise;
            let noise_y = rng.uniform(-RADIUS, RADIUS) * noise;
            let label = circle_label(Point2D::new(x + noise_x, y + noise_y));
            samples.push(Sample::new(x, y, label));
        }
    }
    samples
}

#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            sample_count: CLASSIFICATION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for Circle {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        circle(self.sample_count, self.noise, rng)
    }
}
