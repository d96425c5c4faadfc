use crate::error::{ensure_positive, Result};
use crate::math::{LineSegment2d, Point2d, Vector2d};
use crate::sampler::{sample_curve, SampledPath};

/// A pair of boundary segments flanking the nominal path from start to goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corridor {
    /// The boundary offset by `(-delta, +delta)` from the nominal path.
    pub upper: LineSegment2d,
    /// The boundary offset by `(+delta, -delta)` from the nominal path.
    pub lower: LineSegment2d,
}

impl Corridor {
    /// Builds the corridor around the segment from `start` to `goal`.
    ///
    /// The limits `start ± delta` and `goal ± delta` are offset along the diagonal;
    /// each boundary then takes its x coordinates from one limit and its y coordinates
    /// from the other. For a path along the `x = y` diagonal this places the boundaries
    /// parallel to the path, but in general they are not parallel offsets.
    pub fn build(start: Point2d, goal: Point2d, delta: f64) -> Result<Self> {
        ensure_positive("corridor half-width", delta)?;
        let offset = Vector2d::new(delta, delta);
        let upper_limit = [start + offset, goal + offset];
        let lower_limit = [start - offset, goal - offset];

        let cross = |xs: [Point2d; 2], ys: [Point2d; 2]| {
            LineSegment2d::from_ends(
                Point2d::new(xs[0].x, ys[0].y),
                Point2d::new(xs[1].x, ys[1].y),
            )
        };

        Ok(Self {
            upper: cross(lower_limit, upper_limit),
            lower: cross(upper_limit, lower_limit),
        })
    }

    /// Samples both boundaries with the same step count, so that index `i` on each
    /// corresponds to index `i` on a nominal path sampled with `steps`.
    pub fn sample(&self, steps: usize) -> Result<(SampledPath, SampledPath)> {
        Ok((
            sample_curve(&self.upper, steps)?,
            sample_curve(&self.lower, steps)?,
        ))
    }
}
