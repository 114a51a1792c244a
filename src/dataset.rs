use crate::Error;
use crate::Point2D;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

mod circle;
mod regress_gaussian;
mod regress_plane;
mod spiral;
mod two_gauss;
mod xor;

pub use circle::circle;
pub use circle::Circle;
pub use regress_gaussian::regress_gaussian;
pub use regress_gaussian::RegressGaussian;
pub use regress_plane::regress_plane;
pub use regress_plane::RegressPlane;
pub use spiral::spiral;
pub use spiral::Spiral;
pub use two_gauss::two_gauss;
pub use two_gauss::TwoGauss;
pub use xor::xor;
pub use xor::Xor;

/// Default number of samples of classification datasets.
pub const CLASSIFICATION_SAMPLES: usize = 500;

/// Default number of samples of regression datasets.
pub const REGRESSION_SAMPLES: usize = 1200;

/// A two dimensional example: x and y coordinates with a label.
///
/// Classification datasets label samples with `1.0` or `-1.0`, regression
/// datasets with a value in `[-1, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub label: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, label: f64) -> Self {
        Self { x, y, label }
    }

    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// The `Generate` trait allows for producing datasets.
///
/// Dataset generators implement this trait.  All randomness is drawn from
/// `rng`, so two calls with identically seeded generators return the same
/// samples, in the same order.
pub trait Generate {
    fn generate<R>(&self, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized;
}

/// The datasets this crate knows how to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Circle,
    Xor,
    TwoGauss,
    Spiral,
    RegressPlane,
    RegressGaussian,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Circle,
        DatasetKind::Xor,
        DatasetKind::TwoGauss,
        DatasetKind::Spiral,
        DatasetKind::RegressPlane,
        DatasetKind::RegressGaussian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Circle => "circle",
            DatasetKind::Xor => "xor",
            DatasetKind::TwoGauss => "gauss",
            DatasetKind::Spiral => "spiral",
            DatasetKind::RegressPlane => "reg-plane",
            DatasetKind::RegressGaussian => "reg-gauss",
        }
    }

    pub fn is_classification(self) -> bool {
        !matches!(
            self,
            DatasetKind::RegressPlane | DatasetKind::RegressGaussian
        )
    }

    pub fn default_count(self) -> usize {
        if self.is_classification() {
            CLASSIFICATION_SAMPLES
        } else {
            REGRESSION_SAMPLES
        }
    }

    /// Generates the dataset with its default number of samples.
    pub fn generate<R>(self, noise: f64, rng: &mut R) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        self.generate_with_count(self.default_count(), noise, rng)
    }

    pub fn generate_with_count<R>(
        self,
        sample_count: usize,
        noise: f64,
        rng: &mut R,
    ) -> Vec<Sample>
    where
        R: Rng + ?Sized,
    {
        match self {
            DatasetKind::Circle => circle(sample_count, noise, rng),
            DatasetKind::Xor => xor(sample_count, noise, rng),
            DatasetKind::TwoGauss => two_gauss(sample_count, noise, rng),
            DatasetKind::Spiral => spiral(sample_count, noise, rng),
            DatasetKind::RegressPlane => regress_plane(sample_count, noise, rng),
            DatasetKind::RegressGaussian => regress_gaussian(sample_count, noise, rng),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::DatasetNotFound {
                name: s.to_owned(),
            })
    }
}

/// Generates the dataset called `name` with its default number of samples.
///
/// Unknown names yield [`Error::DatasetNotFound`] and no data.
///
/// # Example
///
/// ```rust
/// use playground_data::ErrorKind;
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
///
/// let samples = playground_data::generate("reg-gauss", 0.0, &mut rng).unwrap();
/// assert_eq!(samples.len(), 1200);
///
/// let err = playground_data::generate("moons", 0.0, &mut rng).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// ```
pub fn generate<R>(name: &str, noise: f64, rng: &mut R) -> Result<Vec<Sample>, Error>
where
    R: Rng + ?Sized,
{
    let kind = name.parse::<DatasetKind>()?;
    Ok(kind.generate(noise, rng))
}
