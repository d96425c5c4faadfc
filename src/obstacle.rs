use crate::error::{ensure_finite, ensure_positive, Result};
use crate::math::Point2d;
use crate::util::Interval;

/// An axis-aligned rectangular obstacle the path has to steer around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// The bottom-left corner of the rectangle.
    origin: Point2d,
    /// The extent along the x-axis.
    width: f64,
    /// The extent along the y-axis.
    height: f64,
}

/// How an obstacle's rectangle is inflated before testing a point against it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MarginPolicy {
    /// Scales the rectangle away from its origin:
    /// `[x, x + w * factor] x [y, y + h * factor]`.
    Forward { factor: f64 },
    /// Adds the forward margin `w * (factor - 1)` on every side:
    /// `[x - w * (factor - 1), x + w * factor]`, and likewise for y.
    ///
    /// The result is `2 * factor - 1` times the obstacle's size (2x for a factor of 1.5)
    /// and always covers the [`MarginPolicy::Forward`] rectangle.
    Symmetric { factor: f64 },
}

impl MarginPolicy {
    /// The inflation factor.
    pub fn factor(&self) -> f64 {
        match *self {
            MarginPolicy::Forward { factor } | MarginPolicy::Symmetric { factor } => factor,
        }
    }
}

impl Obstacle {
    /// Creates an obstacle with its bottom-left corner at `origin`.
    pub fn new(origin: Point2d, width: f64, height: f64) -> Result<Self> {
        ensure_finite("obstacle origin", origin)?;
        ensure_positive("obstacle width", width)?;
        ensure_positive("obstacle height", height)?;
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// The bottom-left corner of the obstacle.
    pub fn origin(&self) -> Point2d {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The x and y extents of the obstacle after applying a safety margin.
    pub fn extents(&self, margin: MarginPolicy) -> [Interval<f64>; 2] {
        let (x, y) = (self.origin.x, self.origin.y);
        match margin {
            MarginPolicy::Forward { factor } => [
                Interval::new(x, x + self.width * factor),
                Interval::new(y, y + self.height * factor),
            ],
            MarginPolicy::Symmetric { factor } => [
                Interval::new(x, x + self.width).grow(self.width * (factor - 1.0)),
                Interval::new(y, y + self.height).grow(self.height * (factor - 1.0)),
            ],
        }
    }

    /// Returns true if the point lies within the inflated rectangle, boundary included.
    pub fn contains(&self, point: Point2d, margin: MarginPolicy) -> bool {
        let [xs, ys] = self.extents(margin);
        xs.contains(point.x) && ys.contains(point.y)
    }
}

/// Returns true if any obstacle contains the point.
pub fn any_contains(obstacles: &[Obstacle], point: Point2d, margin: MarginPolicy) -> bool {
    obstacles.iter().any(|obs| obs.contains(point, margin))
}
