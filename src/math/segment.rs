use super::{ParametricCurve2d, Point2d};
use crate::util::Interval;

/// A straight line segment, parameterised from `t = 0` at the start to `t = 1` at the end.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment2d {
    points: [Point2d; 2],
}

impl LineSegment2d {
    /// Creates a line segment from its two end points.
    pub const fn from_ends(start: Point2d, end: Point2d) -> Self {
        Self {
            points: [start, end],
        }
    }

    /// The first end point.
    pub fn start(&self) -> Point2d {
        self.points[0]
    }

    /// The second end point.
    pub fn end(&self) -> Point2d {
        self.points[1]
    }
}

impl ParametricCurve2d for LineSegment2d {
    fn sample(&self, t: f64) -> Point2d {
        let [start, end] = self.points;
        Point2d::new(
            Interval::new(start.x, end.x).lerp(t),
            Interval::new(start.y, end.y).lerp(t),
        )
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::new(0.0, 1.0)
    }
}
