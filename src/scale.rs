//! Linear mapping from a numeric domain onto a numeric range.

use num_traits::AsPrimitive;

/// A linear scale, mapping values from `domain` to `range`.
///
/// The domain may be given in descending order, in which case the mapping is
/// reversed: `domain[0]` still maps to `range[0]`.
///
/// When the domain has zero width and the scale is not clamped, every value
/// maps to `range[0]`.
///
/// # Example
///
/// ```
/// # use playground_data::LinearScale;
/// let scale = LinearScale::new([0.0, 10.0], [-1.0, 1.0]);
/// assert_eq!(scale.scale(5.0), 0.0);
/// assert_eq!(scale.scale(20.0), 3.0);
///
/// let scale = scale.clamp(true);
/// assert_eq!(scale.scale(20.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new([0.0, 1.0], [0.0, 1.0])
    }
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Whether values outside of the domain are clipped to the range.
    pub fn clamp(self, clamp: bool) -> Self {
        Self { clamp, ..self }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    pub fn scale<T>(&self, value: T) -> f64
    where
        T: AsPrimitive<f64>,
    {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 < d0 {
            interpolate(r1, r0, self.deinterpolate(d1, d0, value.as_()))
        } else {
            interpolate(r0, r1, self.deinterpolate(d0, d1, value.as_()))
        }
    }

    /// Maps `x` from `[a, b]` to `[0, 1]`.
    ///
    /// Requires `a <= b`.
    fn deinterpolate(&self, a: f64, b: f64, x: f64) -> f64 {
        if self.clamp {
            if x <= a {
                return 0.0;
            }
            if x >= b {
                return 1.0;
            }
        }
        let width = b - a;
        if width == 0.0 {
            // Zero-width domain: the result does not depend on `x`.
            width
        } else {
            (x - a) / width
        }
    }
}

fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_variance_scale() {
        let scale = LinearScale::new([0.0, 0.5], [0.5, 4.0]);
        assert_ulps_eq!(scale.scale(0.0), 0.5);
        assert_ulps_eq!(scale.scale(0.5), 4.0);
        assert_ulps_eq!(scale.scale(0.25), 2.25);
        // Unclamped scales extrapolate.
        assert_ulps_eq!(scale.scale(1.0), 7.5);
    }

    #[test]
    fn test_descending_domain() {
        let scale = LinearScale::new([99.0, 0.0], [-6.0, 6.0]);
        assert_ulps_eq!(scale.scale(99_usize), -6.0);
        assert_ulps_eq!(scale.scale(0_usize), 6.0);

        let scale = LinearScale::new([1.0, 0.0], [0.0, 10.0]);
        assert_ulps_eq!(scale.scale(0.25), 7.5);
    }

    #[test]
    fn test_descending_range() {
        let scale = LinearScale::new([0.0, 2.0], [1.0, 0.0]).clamp(true);
        assert_ulps_eq!(scale.scale(0.0), 1.0);
        assert_ulps_eq!(scale.scale(0.5), 0.75);
        assert_ulps_eq!(scale.scale(2.0), 0.0);
        assert_ulps_eq!(scale.scale(3.0), 0.0);
        assert_ulps_eq!(scale.scale(-3.0), 1.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new([3.0, 3.0], [10.0, 20.0]);
        assert_eq!(scale.scale(-100.0), scale.scale(100.0));
        assert_eq!(scale.scale(3.0), 10.0);
        assert_eq!(scale.scale(42.0), 10.0);

        // Clamping still applies before the degenerate rule.
        let scale = scale.clamp(true);
        assert_eq!(scale.scale(2.0), 10.0);
        assert_eq!(scale.scale(4.0), 20.0);
    }

    #[test]
    fn test_accessors() {
        let scale = LinearScale::default();
        assert_eq!(scale.domain(), [0.0, 1.0]);
        assert_eq!(scale.range(), [0.0, 1.0]);
        assert!(!scale.is_clamped());
        assert!(scale.clamp(true).is_clamped());
    }

    proptest!(
        #[test]
        fn identity_inside_unit(x in 0.0..=1.0_f64) {
            let scale = LinearScale::default();
            prop_assert_eq!(scale.scale(x), x);
            prop_assert_eq!(scale.clamp(true).scale(x), x);
        }

        #[test]
        fn extrapolates_outside_unit(x in -1e6..1e6_f64) {
            let scale = LinearScale::default();
            prop_assert_eq!(scale.scale(x), x);
        }

        #[test]
        fn clamped_stays_within_range(x in -1e6..1e6_f64) {
            let y = LinearScale::default().clamp(true).scale(x);
            prop_assert!((0.0..=1.0).contains(&y), "{x} mapped to {y}");
        }

        #[test]
        fn degenerate_ignores_value(
            a in -1e3..1e3_f64,
            x1 in -1e3..1e3_f64,
            x2 in -1e3..1e3_f64,
        ) {
            let scale = LinearScale::new([a, a], [-1.0, 1.0]);
            prop_assert_eq!(scale.scale(x1), scale.scale(x2));
        }
    );
}
