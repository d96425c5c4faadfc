use crate::math::{sign_vec, Point2d};
use crate::obstacle::{any_contains, MarginPolicy, Obstacle};
use cgmath::MetricSpace;

/// Displaces a blocked path point towards one side of the corridor until it is clear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidanceResolver {
    /// The distance moved along each axis per step.
    pub step_size: f64,
    /// The maximum number of steps before giving up.
    pub max_steps: usize,
    /// The margin applied when checking whether a displaced point is clear.
    pub margin: MarginPolicy,
}

/// Avoidance ran out of steps, or stopped moving, while the point was still inside an obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blocked {
    /// The last position tried.
    pub last: Point2d,
    /// The number of steps taken.
    pub steps: usize,
}

impl AvoidanceResolver {
    /// Moves `point` clear of all `obstacles`.
    ///
    /// Of the two boundary points at the same path index, the one further from the
    /// blocking obstacle's origin is chosen as the target (the lower one on a tie).
    /// The point then moves by `step_size` along the sign of the offset to that
    /// target on each axis, at least once, and keeps moving in that same direction
    /// until no obstacle contains it.
    ///
    /// Fails once `max_steps` steps have been taken, or as soon as a step no longer
    /// changes the position (a zero direction, or a step lost to rounding).
    pub fn resolve(
        &self,
        point: Point2d,
        upper: Point2d,
        lower: Point2d,
        obstacle: &Obstacle,
        obstacles: &[Obstacle],
    ) -> Result<Point2d, Blocked> {
        let anchor = obstacle.origin();
        let target = if upper.distance(anchor) > lower.distance(anchor) {
            upper
        } else {
            lower
        };
        let step = sign_vec(target - point) * self.step_size;

        let mut pos = point;
        let mut steps = 0;
        loop {
            let next = pos + step;
            if next == pos {
                return Err(Blocked { last: pos, steps });
            }
            pos = next;
            steps += 1;
            if !any_contains(obstacles, pos, self.margin) {
                return Ok(pos);
            }
            if steps >= self.max_steps {
                return Err(Blocked { last: pos, steps });
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const SYMMETRIC: MarginPolicy = MarginPolicy::Symmetric { factor: 1.5 };

    fn resolver(max_steps: usize) -> AvoidanceResolver {
        AvoidanceResolver {
            step_size: 0.1,
            max_steps,
            margin: SYMMETRIC,
        }
    }

    #[test]
    fn steps_towards_lower_boundary_on_tie() {
        let obs = Obstacle::new(Point2d::new(50.0, 50.0), 5.0, 5.0).unwrap();
        let point = Point2d::new(50.5, 50.5);
        let upper = Point2d::new(40.5, 60.5);
        let lower = Point2d::new(60.5, 40.5);
        let pos = resolver(1000).resolve(point, upper, lower, &obs, &[obs]).unwrap();

        // Moves along (+1, -1) until y drops below 47.5
        assert!(!obs.contains(pos, SYMMETRIC));
        assert!(pos.x > point.x);
        assert_approx_eq!(pos.x - point.x, point.y - pos.y, 1e-9);
        assert!(pos.y < 47.5 && pos.y > 47.3);
    }

    #[test]
    fn steps_towards_further_boundary() {
        let obs = Obstacle::new(Point2d::new(52.0, 48.0), 5.0, 5.0).unwrap();
        let point = Point2d::new(53.0, 53.0);
        // The upper point is further from the obstacle's origin
        let upper = Point2d::new(43.0, 63.0);
        let lower = Point2d::new(63.0, 43.0);
        let pos = resolver(1000).resolve(point, upper, lower, &obs, &[obs]).unwrap();
        assert!(pos.x < point.x);
        assert!(pos.y > point.y);
        assert!(!obs.contains(pos, SYMMETRIC));
    }

    #[test]
    fn always_moves_at_least_once() {
        let obs = Obstacle::new(Point2d::new(0.0, 0.0), 1.0, 1.0).unwrap();
        let point = Point2d::new(10.0, 10.0);
        let pos = resolver(5)
            .resolve(point, Point2d::new(5.0, 15.0), Point2d::new(15.0, 5.0), &obs, &[obs])
            .unwrap();
        assert_approx_eq!(pos.x, 10.1);
        assert_approx_eq!(pos.y, 9.9);
    }

    #[test]
    fn gives_up_after_max_steps() {
        let obs = Obstacle::new(Point2d::new(-100.0, -100.0), 200.0, 200.0).unwrap();
        let point = Point2d::new(0.0, 0.0);
        let result = resolver(50).resolve(
            point,
            Point2d::new(-10.0, 10.0),
            Point2d::new(10.0, -10.0),
            &obs,
            &[obs],
        );
        let blocked = result.unwrap_err();
        assert_eq!(blocked.steps, 50);
        assert!(obs.contains(blocked.last, SYMMETRIC));
    }

    #[test]
    fn zero_offset_fails_immediately() {
        let obs = Obstacle::new(Point2d::new(0.0, 0.0), 5.0, 5.0).unwrap();
        let point = Point2d::new(2.0, 2.0);
        let result = resolver(10).resolve(point, point, point, &obs, &[obs]);
        assert_eq!(
            result,
            Err(Blocked {
                last: point,
                steps: 0
            })
        );
    }

    #[test]
    fn step_lost_to_rounding_fails_immediately() {
        let obs = Obstacle::new(Point2d::new(50.0, 50.0), 5.0, 5.0).unwrap();
        let point = Point2d::new(50.4, 50.4);
        let tiny = AvoidanceResolver {
            step_size: 1e-20,
            max_steps: usize::MAX,
            margin: SYMMETRIC,
        };
        let result = tiny.resolve(
            point,
            Point2d::new(40.4, 60.4),
            Point2d::new(60.4, 40.4),
            &obs,
            &[obs],
        );
        assert_eq!(
            result,
            Err(Blocked {
                last: point,
                steps: 0
            })
        );
    }
}
