use super::Generate;
use super::Sample;
use super::REGRESSION_SAMPLES;
use crate::random::RandomSource as _;
use crate::LinearScale;
use crate::Point2D;
use rand::Rng;

const RADIUS: f64 = 6.0;

/// Centers and signs of the six bumps, in two rows of alternating signs.
const GAUSSIANS: [(f64, f64, f64); 6] = [
    (-4.0, 2.5, 1.0),
    (0.0, 2.5, -1.0),
    (4.0, 2.5, 1.0),
    (-4.0, -2.5, -1.0),
    (0.0, -2.5, 1.0),
    (4.0, -2.5, -1.0),
];

/// Returns the signed bump value with the largest magnitude at `p`.
fn gaussian_label(label_scale: &LinearScale, p: Point2D) -> f64 {
    let mut label = 0.0;
    for (cx, cy, sign) in GAUSSIANS {
        let distance = (p - Point2D::new(cx, cy)).norm();
        let candidate = sign * label_scale.scale(distance);
        if f64::abs(candidate) > f64::abs(label) {
            label = candidate;
        }
    }
    label
}

/// Points spread uniformly over `[-6, 6]²`, labeled by six signed bumps.
///
/// Each bump decreases linearly from 1 at its center to 0 at distance 2;
/// the label is the strongest bump at the (noise-perturbed) point.
pub fn regress_gaussian<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    tracing::debug!(sample_count, noise, "generating gaussian regression");

    let label_scale = LinearScale::new([0.0, 2.0], [1.0, 0.0]).clamp(true);
    (0..sample_count)
        .map(|_| {
            let x = rng.uniform(-RADIUS, RADIUS);
            let y = rng.uniform(-RADIUS, RADIUS);
            let noise_x = rng.uniform(-RADIUS, RADIUS) * noise;
            let noise_y = rng.uniform(-RADIUS, RADIUS) * noise;
            let label = gaussian_label(&label_scale, Point2D::new(x + noise_x, y + noise_y));
            Sample::new(x, y, label)
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct RegressGaussian {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for RegressGaussian {
    fn default() -> Self {
        Self {
            sample_count: REGRESSION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for RegressGaussian {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        regress_gaussian(self.sample_count, self.noise, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    fn label_at(x: f64, y: f64) -> f64 {
        let label_scale = LinearScale::new([0.0, 2.0], [1.0, 0.0]).clamp(true);
        gaussian_label(&label_scale, Point2D::new(x, y))
    }

    #[test]
    fn test_gaussian_label() {
        // On a center.
        assert_eq!(label_at(-4.0, 2.5), 1.0);
        assert_eq!(label_at(0.0, 2.5), -1.0);
        assert_eq!(label_at(4.0, -2.5), -1.0);

        // Half-way to the edge of a bump.
        assert_ulps_eq!(label_at(0.0, -1.5), 0.5);

        // Too far from every center.
        assert_eq!(label_at(-6.0, 6.0), 0.0);

        // Half-way between two bumps of opposite signs.
        assert_eq!(label_at(-2.0, 2.5), 0.0);
    }

    #[test]
    fn test_regress_gaussian_range() {
        let mut rng = Pcg64::seed_from_u64(0);
        for noise in [0.0, 0.5, 1.0] {
            let samples = regress_gaussian(600, noise, &mut rng);
            assert_eq!(samples.len(), 600);
            for s in samples {
                assert!((-1.0..=1.0).contains(&s.label), "{s:?}");
                assert!(s.x.abs() <= RADIUS && s.y.abs() <= RADIUS);
            }
        }
    }

    #[test]
    fn test_regress_gaussian_without_noise() {
        let mut rng = Pcg64::seed_from_u64(5);
        for s in RegressGaussian::default().generate(&mut rng) {
            assert_eq!(s.label, label_at(s.x, s.y));
        }
    }
}
