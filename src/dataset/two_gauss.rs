use super::Generate;
use super::Sample;
use super::CLASSIFICATION_SAMPLES;
use crate::random::RandomSource as _;
use crate::LinearScale;
use rand::Rng;

/// Two gaussian blobs, centered on `(2, 2)` (positive) and `(-2, -2)`
/// (negative).
///
/// The noise level in `[0, 0.5]` maps linearly to a variance in `[0.5, 4]`.
/// Odd sample counts are rounded down to the closest even number.
pub fn two_gauss<R>(sample_count: usize, noise: f64, rng: &mut R) -> Vec<Sample>
where
    R: Rng + ?Sized,
{
    let variance = LinearScale::new([0.0, 0.5], [0.5, 4.0]).scale(noise);
    tracing::debug!(sample_count, noise, variance, "generating two gaussians");

    let half = sample_count / 2;
    let mut samples = Vec::with_capacity(2 * half);
    for (cx, cy, label) in [(2.0, 2.0, 1.0), (-2.0, -2.0, -1.0)] {
        for _ in 0..half {
            let x = rng.normal(cx, variance);
            let y = rng.normal(cy, variance);
            samples.push(Sample::new(x, y, label));
        }
    }
    samples
}

/// Two gaussian blobs of opposite labels.
///
/// # Example
///
/// ```rust
/// use playground_data::Generate as _;
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(3);
/// let samples = playground_data::TwoGauss { sample_count: 10, noise: 0.0 }
///     .generate(&mut rng);
/// assert_eq!(samples.iter().filter(|s| s.label > 0.0).count(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TwoGauss {
    pub sample_count: usize,
    pub noise: f64,
}

impl Default for TwoGauss {
    fn default() -> Self {
        Self {
            sample_count: CLASSIFICATION_SAMPLES,
            noise: 0.0,
        }
    }
}

impl Generate for TwoGauss {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        two_gauss(self.sample_count, self.noise, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    #[test]
    fn test_two_gauss_halves() {
        let mut rng = Pcg64::seed_from_u64(0);
        let samples = TwoGauss::default().generate(&mut rng);
        assert_eq!(samples.len(), 500);
        assert!(samples[..250].iter().all(|s| s.label == 1.0));
        assert!(samples[250..].iter().all(|s| s.label == -1.0));
    }

    #[test]
    fn test_two_gauss_odd_count() {
        let mut rng = Pcg64::seed_from_u64(0);
        let samples = two_gauss(7, 0.2, &mut rng);
        assert_eq!(samples.len(), 6);
        assert_eq!(samples.iter().filter(|s| s.label == 1.0).count(), 3);
    }

    #[test]
    fn test_two_gauss_centers() {
        let mut rng = Pcg64::seed_from_u64(1);
        let samples = two_gauss(4000, 0.0, &mut rng);
        let (positives, negatives) = samples.split_at(2000);
        let mean = |samples: &[Sample]| {
            let sum = samples
                .iter()
                .fold(crate::Point2D::zeros(), |sum, s| sum + s.point());
            sum / samples.len() as f64
        };
        let positive_center = mean(positives);
        let negative_center = mean(negatives);
        assert!((positive_center - crate::Point2D::new(2.0, 2.0)).norm() < 0.1);
        assert!((negative_center - crate::Point2D::new(-2.0, -2.0)).norm() < 0.1);
    }
}
