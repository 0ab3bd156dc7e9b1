use super::Rgb;

/// Half-open stepping range: `start, start + step, ...` while below `stop`.
///
/// The count is `ceil((stop - start) / step)`; a non-finite or non-positive
/// count (zero step, inverted bounds, NaN) yields an empty range.
pub fn range_step(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil();
    if !count.is_finite() || count <= 0.0 { return Vec::new() }
    (0..count as usize).map(|i| start + i as f64 * step).collect()
}

/// Step function from a continuous value to one of `colors.len()` buckets.
///
/// Bucket `i` covers `[breakpoints[i-1], breakpoints[i])`; the first bucket is
/// open below and the last open above. Only the first `colors.len() - 1`
/// breakpoints take part.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdScale {
    breakpoints: Vec<f64>,
    colors: Vec<Rgb>,
}

impl ThresholdScale {
    pub fn new(breakpoints: Vec<f64>, colors: Vec<Rgb>) -> Self {
        Self { breakpoints, colors }
    }

    /// Split `[min, max]` into `colors.len() - 1` equal steps starting at `min`.
    pub fn for_extent(min: f64, max: f64, colors: Vec<Rgb>) -> Self {
        let steps = colors.len().saturating_sub(1).max(1) as f64;
        let breakpoints = range_step(min, max, (max - min) / steps);
        Self::new(breakpoints, colors)
    }

    /// Breakpoints in effect.
    pub fn breakpoints(&self) -> &[f64] {
        let n = self.breakpoints.len().min(self.colors.len().saturating_sub(1));
        &self.breakpoints[..n]
    }

    pub fn colors(&self) -> &[Rgb] { &self.colors }

    /// Index of the bucket holding `x`: the number of breakpoints `<= x`. NaN goes to bucket 0.
    pub fn bucket(&self, x: f64) -> usize {
        if x.is_nan() { return 0 }
        self.breakpoints().partition_point(|&b| b <= x)
    }

    pub fn color(&self, x: f64) -> Rgb {
        self.colors[self.bucket(x)]
    }

    /// `[lower, upper)` of bucket `i`; `None` marks an open end.
    pub fn invert_extent(&self, i: usize) -> (Option<f64>, Option<f64>) {
        let breakpoints = self.breakpoints();
        let lower = i.checked_sub(1).and_then(|j| breakpoints.get(j)).copied();
        let upper = breakpoints.get(i).copied();
        (lower, upper)
    }

    /// Smallest and largest breakpoint.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let breakpoints = self.breakpoints();
        Some((*breakpoints.first()?, *breakpoints.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::GREENS_9;

    fn greens(min: f64, max: f64) -> ThresholdScale {
        ThresholdScale::for_extent(min, max, GREENS_9.to_vec())
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(range_step(0.0, 8.0, 1.0), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(range_step(0.0, 1.0, 0.3).len(), 4);
        assert!(range_step(3.0, 3.0, 0.0).is_empty());
        assert!(range_step(5.0, 1.0, 1.0).is_empty());
        assert!(range_step(f64::NAN, 1.0, 1.0).is_empty());
    }

    #[test]
    fn eight_breakpoints_start_at_min() {
        let scale = greens(2.6, 75.1);
        let breakpoints = scale.breakpoints();
        assert_eq!(breakpoints.len(), 8);
        assert_eq!(breakpoints[0], 2.6);
        assert!(breakpoints.last().copied().unwrap() < 75.1);
    }

    #[test]
    fn values_below_first_breakpoint_get_the_lightest_color() {
        let scale = greens(2.6, 75.1);
        assert_eq!(scale.bucket(0.0), 0);
        assert_eq!(scale.color(0.0), GREENS_9[0]);
        assert_eq!(scale.bucket(2.6), 1);
        assert_eq!(scale.bucket(75.1), 8);
        assert_eq!(scale.color(1000.0), GREENS_9[8]);
    }

    #[test]
    fn buckets_are_monotonic() {
        let scale = greens(2.6, 75.1);
        let values: Vec<f64> = (-20..=1000).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            assert!(scale.bucket(pair[0]) <= scale.bucket(pair[1]), "{} vs {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn invert_extent_brackets_each_bucket() {
        let scale = greens(0.0, 80.0);
        assert_eq!(scale.invert_extent(0), (None, Some(0.0)));
        assert_eq!(scale.invert_extent(3), (Some(20.0), Some(30.0)));
        assert_eq!(scale.invert_extent(8), (Some(70.0), None));
        for i in 1..8 {
            let (lo, _) = scale.invert_extent(i);
            assert_eq!(scale.bucket(lo.unwrap()), i);
        }
    }

    #[test]
    fn excess_breakpoints_are_ignored() {
        let scale = ThresholdScale::new(vec![1.0, 2.0, 3.0], vec![GREENS_9[0], GREENS_9[1]]);
        assert_eq!(scale.breakpoints(), &[1.0]);
        assert_eq!(scale.bucket(10.0), 1);
    }

    #[test]
    fn degenerate_extent_colors_everything_lightest() {
        let scale = greens(5.0, 5.0);
        assert!(scale.breakpoints().is_empty());
        assert_eq!(scale.color(5.0), GREENS_9[0]);
        assert_eq!(scale.invert_extent(4), (None, None));
        assert!(scale.extent().is_none());
    }

    #[test]
    fn nan_lands_in_first_bucket() {
        assert_eq!(greens(0.0, 80.0).bucket(f64::NAN), 0);
    }
}
