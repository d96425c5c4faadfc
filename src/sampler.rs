use crate::error::{PlanError, Result};
use crate::math::{round_point, LineSegment2d, ParametricCurve2d, Point2d};
use std::ops::Index;

/// Number of decimal places kept in sampled coordinates.
pub const SAMPLE_DECIMALS: i32 = 2;

/// A fixed number of points sampled evenly along a curve.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledPath {
    points: Vec<Point2d>,
}

impl SampledPath {
    /// The number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A sampled path always holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The sampled points in order.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    pub fn first(&self) -> Point2d {
        self.points[0]
    }

    pub fn last(&self) -> Point2d {
        self.points[self.points.len() - 1]
    }
}

impl Index<usize> for SampledPath {
    type Output = Point2d;

    fn index(&self, index: usize) -> &Point2d {
        &self.points[index]
    }
}

/// Samples `steps` points evenly from `p0` to `p1`, both ends included,
/// with coordinates rounded to [`SAMPLE_DECIMALS`] places.
pub fn sample(p0: Point2d, p1: Point2d, steps: usize) -> Result<SampledPath> {
    sample_curve(&LineSegment2d::from_ends(p0, p1), steps)
}

/// Samples `steps` points at evenly spaced parameter values across the curve's bounds.
pub fn sample_curve(curve: &impl ParametricCurve2d, steps: usize) -> Result<SampledPath> {
    if steps < 2 {
        return Err(PlanError::InvalidArgument(format!(
            "step count must be at least 2, got {steps}"
        )));
    }
    let bounds = curve.bounds();
    let last = (steps - 1) as f64;
    let points = (0..steps)
        .map(|i| {
            // Pin the final sample to the end of the curve
            let t = if i == steps - 1 {
                bounds.max
            } else {
                bounds.lerp(i as f64 / last)
            };
            round_point(curve.sample(t), SAMPLE_DECIMALS)
        })
        .collect();
    Ok(SampledPath { points })
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn rejects_fewer_than_two_steps() {
        let p = Point2d::new(0.0, 0.0);
        assert!(matches!(sample(p, p, 0), Err(PlanError::InvalidArgument(_))));
        assert!(matches!(sample(p, p, 1), Err(PlanError::InvalidArgument(_))));
        assert_eq!(sample(p, p, 2).unwrap().len(), 2);
    }

    #[test]
    fn reference_path_is_rounded() {
        let path = sample(Point2d::new(10.0, 10.0), Point2d::new(90.0, 90.0), 100).unwrap();
        assert_eq!(path.len(), 100);
        assert_eq!(path.first(), Point2d::new(10.0, 10.0));
        assert_eq!(path.last(), Point2d::new(90.0, 90.0));
        // 10 + 80 / 99 = 10.808080...
        assert_approx_eq!(path[1].x, 10.81, 1e-9);
        assert_approx_eq!(path[50].y, 50.4, 1e-9);
    }

    proptest! {
        #[test]
        fn samples_are_monotonic_between_ends(
            x0 in -100.0..100.0f64,
            y0 in -100.0..100.0f64,
            x1 in -100.0..100.0f64,
            y1 in -100.0..100.0f64,
            steps in 2usize..300,
        ) {
            let (p0, p1) = (Point2d::new(x0, y0), Point2d::new(x1, y1));
            let path = sample(p0, p1, steps).unwrap();
            prop_assert_eq!(path.len(), steps);
            prop_assert!((path.first().x - x0).abs() <= 0.005 + 1e-9);
            prop_assert!((path.first().y - y0).abs() <= 0.005 + 1e-9);
            prop_assert!((path.last().x - x1).abs() <= 0.005 + 1e-9);
            prop_assert!((path.last().y - y1).abs() <= 0.005 + 1e-9);
            for pair in path.points().windows(2) {
                prop_assert!((pair[1].x - pair[0].x) * (x1 - x0) >= 0.0);
                prop_assert!((pair[1].y - pair[0].y) * (y1 - y0) >= 0.0);
            }
        }
    }
}
