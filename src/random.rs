//! Uniform and normal sampling on top of any random number generator.

use rand::Rng;

/// Sampling primitives shared by the dataset generators.
///
/// Implemented for every [`rand::Rng`], so generators can be fed a seeded
/// generator (e.g. `rand_pcg::Pcg64`) to get reproducible datasets.
pub trait RandomSource {
    /// Returns a sample from a uniform `[a, b)` distribution.
    ///
    /// Unlike [`Rng::gen_range`], `a` may be greater than or equal to `b`.
    fn uniform(&mut self, a: f64, b: f64) -> f64;

    /// Returns a sample from a normal distribution, using the polar form of
    /// the Box-Muller transform.
    fn normal(&mut self, mean: f64, variance: f64) -> f64;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    fn uniform(&mut self, a: f64, b: f64) -> f64 {
        self.gen::<f64>() * (b - a) + a
    }

    fn normal(&mut self, mean: f64, variance: f64) -> f64 {
        let (v1, s) = loop {
            let v1 = 2.0 * self.gen::<f64>() - 1.0;
            let v2 = 2.0 * self.gen::<f64>() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s <= 1.0 {
                break (v1, s);
            }
        };
        let result = f64::sqrt(-2.0 * f64::ln(s) / s) * v1;
        mean + f64::sqrt(variance) * result
    }
}
