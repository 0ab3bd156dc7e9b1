/// Continuous linear map from a two-point domain to a two-point range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] { self.domain }

    pub fn range(&self) -> [f64; 2] { self.range }

    /// Map `x` into the range. A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let width = d1 - d0;
        let t = if width.is_nan() {
            f64::NAN
        } else if width != 0.0 {
            (x - d0) / width
        } else {
            0.5
        };
        r0 * (1.0 - t) + r1 * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_ends() {
        let x = LinearScale::new([2.6, 75.1], [600.0, 860.0]);
        assert!((x.apply(2.6) - 600.0).abs() < 1e-9);
        assert!((x.apply(75.1) - 860.0).abs() < 1e-9);
        assert!(x.apply(30.0) > 600.0 && x.apply(30.0) < 860.0);
    }

    #[test]
    fn values_outside_the_domain_extrapolate() {
        let x = LinearScale::new([0.0, 10.0], [0.0, 100.0]);
        assert_eq!(x.apply(-1.0), -10.0);
        assert_eq!(x.apply(20.0), 200.0);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let x = LinearScale::new([5.0, 5.0], [600.0, 860.0]);
        assert_eq!(x.apply(5.0), 730.0);
        assert_eq!(x.apply(-100.0), 730.0);
    }
}
