use crate::Error;
use rand::seq::SliceRandom as _;
use rand::Rng;

/// Shuffles `samples` and splits them into a training and a validation set.
///
/// The validation set receives the last `validation_fraction` of the
/// shuffled samples, the training set gets `floor(len * (1 - fraction))`
/// samples.  Every input sample ends up in exactly one of the two sets.
///
/// # Example
///
/// ```rust
/// # use playground_data::DatasetKind;
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
/// let samples = DatasetKind::Xor.generate(0.0, &mut rng);
///
/// let (train, valid) = playground_data::split(&samples, 0.25, &mut rng).unwrap();
/// assert_eq!(train.len(), 375);
/// assert_eq!(valid.len(), 125);
/// ```
pub fn split<T, R>(
    samples: &[T],
    validation_fraction: f64,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>), Error>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if !(0.0..=1.0).contains(&validation_fraction) {
        return Err(Error::InvalidFraction(validation_fraction));
    }

    let mut shuffled = samples.to_vec();
    shuffled.shuffle(rng);

    let split_point = (shuffled.len() as f64 * (1.0 - validation_fraction)) as usize;
    let valid = shuffled.split_off(split_point);

    tracing::debug!(
        train = shuffled.len(),
        valid = valid.len(),
        "split dataset"
    );

    Ok((shuffled, valid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    #[test]
    fn test_split_errors() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(
            split::<usize, _>(&[], 0.5, &mut rng),
            Err(Error::EmptyDataset)
        );
        assert_eq!(
            split(&[1, 2, 3], 1.5, &mut rng),
            Err(Error::InvalidFraction(1.5))
        );
        assert_eq!(
            split(&[1, 2, 3], -0.1, &mut rng),
            Err(Error::InvalidFraction(-0.1))
        );
        assert!(split(&[1, 2, 3], f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_split_extremes() {
        let mut rng = Pcg64::seed_from_u64(1);
        let (train, valid) = split(&[1, 2, 3], 0.0, &mut rng).unwrap();
        assert_eq!(train.len(), 3);
        assert!(valid.is_empty());

        let (train, valid) = split(&[1, 2, 3], 1.0, &mut rng).unwrap();
        assert!(train.is_empty());
        assert_eq!(valid.len(), 3);
    }

    #[test]
    fn test_split_rounds_down() {
        let mut rng = Pcg64::seed_from_u64(2);
        let samples: Vec<usize> = (0..5).collect();
        let (train, valid) = split(&samples, 0.5, &mut rng).unwrap();
        assert_eq!(train.len(), 2);
        assert_eq!(valid.len(), 3);
    }

    proptest!(
        #[test]
        fn covers_every_sample(
            seed in any::<u64>(),
            len in 1..200_usize,
            fraction in 0.0..=1.0_f64,
        ) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let samples: Vec<usize> = (0..len).collect();
            let (train, valid) = split(&samples, fraction, &mut rng).unwrap();
            prop_assert_eq!(train.len() + valid.len(), len);

            let mut all: Vec<usize> = train.into_iter().chain(valid).collect();
            all.sort_unstable();
            prop_assert_eq!(all, samples);
        }
    );
}
