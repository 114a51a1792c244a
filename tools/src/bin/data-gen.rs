use anyhow::Context as _;
use anyhow::Result;
use playground_data::color;
use playground_data::DatasetKind;
use playground_data::Sample;
use rand::Rng;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use rayon::iter::IntoParallelRefIterator as _;
use rayon::iter::ParallelIterator as _;
use std::io;
use std::io::Write as _;

const USAGE: &str = "Usage: data-gen [options] [out-samples] >out.samples";

const DATASETS: &str = "DATASETS:
    circle      Positive disk surrounded by a negative ring
    xor         Quadrants labeled by the sign of x*y
    gauss       Two gaussian clouds of opposite labels
    spiral      Two interleaved spirals
    reg-plane   Regression over a tilted plane
    reg-gauss   Regression over six signed bumps";

/// Axis-aligned bounding box of the samples, as `([min_x, min_y], [max_x,
/// max_y])`.
fn bounds(samples: &[Sample]) -> Option<([f64; 2], [f64; 2])> {
    if samples.is_empty() {
        return None;
    }
    let extent = |coordinate: fn(&Sample) -> f64| {
        let values = samples.par_iter().map(coordinate);
        rayon::join(
            || values.clone().reduce(|| f64::INFINITY, f64::min),
            || values.clone().reduce(|| f64::NEG_INFINITY, f64::max),
        )
    };
    let ((min_x, max_x), (min_y, max_y)) = rayon::join(|| extent(|s| s.x), || extent(|s| s.y));
    Some(([min_x, min_y], [max_x, max_y]))
}

fn write_samples<W>(mut w: W, samples: &[Sample], colors: bool) -> io::Result<()>
where
    W: io::Write,
{
    for s in samples {
        if colors {
            let color = color::color_for_label(s.label);
            writeln!(w, "{} {} {} {color}", s.x, s.y, s.label)?;
        } else {
            writeln!(w, "{} {} {}", s.x, s.y, s.label)?;
        }
    }
    Ok(())
}

/// Shuffles `samples`, then writes the training part, a blank line and the
/// validation part.
fn write_split<W, R>(
    mut w: W,
    samples: &[Sample],
    validation_fraction: f64,
    colors: bool,
    rng: &mut R,
) -> Result<()>
where
    W: io::Write,
    R: Rng + ?Sized,
{
    let (train, valid) = playground_data::split(samples, validation_fraction, rng)
        .context("failed to split samples")?;
    write_samples(&mut w, &train, colors).context("failed to write training samples")?;
    writeln!(w)?;
    write_samples(&mut w, &valid, colors).context("failed to write validation samples")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optopt("d", "dataset", "name of the dataset, see DATASETS", "NAME");
    options.optopt("n", "noise", "noise level, within [0, 1] (default: 0)", "NOISE");
    options.optopt("c", "count", "number of samples", "COUNT");
    options.optopt("s", "seed", "seed of the random number generator", "SEED");
    options.optopt(
        "v",
        "validation",
        "fraction of samples to set aside for validation",
        "FRACTION",
    );
    options.optflag("", "colors", "append the display color of each label");
    options.optflag("", "stats", "print the bounds of the samples");

    let usage = format!("{USAGE}\n\n{DATASETS}");
    let matches = playground_tools::parse_args(options, &usage, 1)?;
    let _chrome_trace_guard = playground_tools::init_tracing(&matches);

    let kind: DatasetKind = matches
        .opt_str("d")
        .context("missing required option 'dataset'")?
        .parse()
        .context("invalid value for option 'dataset'")?;

    let noise: f64 = playground_tools::opt_or(&matches, "n", 0.0)?;
    if !(0.0..=1.0).contains(&noise) {
        anyhow::bail!("noise must be within [0, 1], got {noise}");
    }
    let count = playground_tools::opt_or(&matches, "c", kind.default_count())?;

    let seed = matches
        .opt_get::<u64>("s")
        .context("invalid value for option 'seed'")?;
    let mut rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let samples = kind.generate_with_count(count, noise, &mut rng);
    tracing::info!(dataset = %kind, count = samples.len(), noise, "generated samples");

    if matches.opt_present("stats") {
        match bounds(&samples) {
            Some(([min_x, min_y], [max_x, max_y])) => {
                eprintln!("x: [{min_x}, {max_x}]");
                eprintln!("y: [{min_y}, {max_y}]");
            }
            None => eprintln!("no samples"),
        }
        if kind.is_classification() {
            let positives = samples.iter().filter(|s| s.label > 0.0).count();
            let negatives = samples.len() - positives;
            eprintln!("labels: {positives} positive, {negatives} negative");
        }
    }

    let colors = matches.opt_present("colors");
    let mut output = playground_tools::writer(matches.free.first())?;
    let validation = matches
        .opt_get::<f64>("v")
        .context("invalid value for option 'validation'")?;
    match validation {
        Some(fraction) => write_split(&mut output, &samples, fraction, colors, &mut rng)?,
        None => write_samples(&mut output, &samples, colors).context("failed to write samples")?,
    }
    output.flush().context("failed to write samples")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::strategy::Strategy;
    use rand::SeedableRng as _;

    fn sample() -> impl Strategy<Value = Sample> {
        (-1e6..1e6_f64, -1e6..1e6_f64).prop_map(|(x, y)| Sample::new(x, y, 1.0))
    }

    #[test]
    fn test_write_samples() {
        let samples = [Sample::new(0.5, -1.0, 1.0), Sample::new(2.0, 3.0, -1.0)];

        let mut out = Vec::new();
        write_samples(&mut out, &samples, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 -1 1\n2 3 -1\n");

        let mut out = Vec::new();
        write_samples(&mut out, &samples, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.5 -1 1 #0877bd\n2 3 -1 #f59322\n"
        );
    }

    fn split_output(seed: u64, fraction: f64) -> String {
        let mut rng = Pcg64::seed_from_u64(seed);
        let samples = DatasetKind::Xor.generate_with_count(40, 0.1, &mut rng);
        let mut out = Vec::new();
        write_split(&mut out, &samples, fraction, false, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_split() {
        let out = split_output(7, 0.25);
        let (train, valid) = out.split_once("\n\n").unwrap();
        assert_eq!(train.lines().count(), 30);
        assert_eq!(valid.lines().count(), 10);
        assert!(!valid.lines().any(str::is_empty));

        assert_eq!(split_output(7, 0.25), out);
        assert_ne!(split_output(8, 0.25), out);
    }

    #[test]
    fn test_write_split_everything_validated() {
        let out = split_output(3, 1.0);
        assert!(out.starts_with('\n'));
        assert_eq!(out.lines().filter(|l| !l.is_empty()).count(), 40);
    }

    #[test]
    fn test_write_split_rejects_bad_fraction() {
        let mut rng = Pcg64::seed_from_u64(0);
        let samples = [Sample::new(1.0, 1.0, 1.0)];
        let mut out = Vec::new();
        assert!(write_split(&mut out, &samples, 2.0, false, &mut rng).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_bounds_empty() {
        assert_eq!(bounds(&[]), None);
    }

    proptest::proptest!(
        #[test]
        fn bounds_contain_samples(samples in vec(sample(), 1..200)) {
            let ([min_x, min_y], [max_x, max_y]) = bounds(&samples).unwrap();
            for s in &samples {
                proptest::prop_assert!((min_x..=max_x).contains(&s.x));
                proptest::prop_assert!((min_y..=max_y).contains(&s.y));
            }
            proptest::prop_assert!(samples.iter().any(|s| s.x == min_x));
            proptest::prop_assert!(samples.iter().any(|s| s.y == max_y));
        }
    );
}
