use crate::avoidance::{AvoidanceResolver, Blocked};
use crate::collision::{scan, ScanOutcome};
use crate::corridor::Corridor;
#[cfg(feature = "debug")]
use crate::debug::{debug_line, debug_point, debug_rect};
use crate::error::{ensure_finite, ensure_positive, PlanError, Result};
use crate::math::Point2d;
use crate::obstacle::{MarginPolicy, Obstacle};
use crate::sampler::{sample, SampledPath};
use log::{debug, trace, warn};

/// The upper limit on the derived avoidance step bound.
pub const MAX_AVOIDANCE_STEPS: usize = 1_000_000;

/// The parameters of a planning run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// The number of points on the nominal path, and in the output.
    pub steps: usize,
    /// The number of upcoming samples checked for obstacles, the current one included.
    pub lookahead: usize,
    /// The half-width of the corridor.
    pub delta: f64,
    /// The margin used when scanning ahead along the nominal path.
    pub scan_margin: MarginPolicy,
    /// The margin used when checking whether a displaced point is clear.
    pub recheck_margin: MarginPolicy,
    /// The distance moved along each axis per avoidance step.
    pub step_size: f64,
    /// The maximum number of avoidance steps for a single point.
    /// Derived from the corridor width when not set.
    pub max_avoidance_steps: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            lookahead: 5,
            delta: 10.0,
            scan_margin: MarginPolicy::Forward { factor: 1.5 },
            recheck_margin: MarginPolicy::Symmetric { factor: 1.5 },
            step_size: 0.1,
            max_avoidance_steps: None,
        }
    }
}

impl PlannerConfig {
    /// Checks that every parameter is within range.
    pub fn validate(&self) -> Result<()> {
        if self.steps < 2 {
            return Err(PlanError::InvalidArgument(format!(
                "step count must be at least 2, got {}",
                self.steps
            )));
        }
        if self.lookahead == 0 {
            return Err(PlanError::InvalidArgument(
                "lookahead must cover at least the current sample".into(),
            ));
        }
        if self.max_avoidance_steps == Some(0) {
            return Err(PlanError::InvalidArgument(
                "maximum avoidance steps must be at least 1".into(),
            ));
        }
        ensure_positive("corridor half-width", self.delta)?;
        ensure_positive("avoidance step size", self.step_size)?;
        ensure_positive("scan margin factor", self.scan_margin.factor())?;
        ensure_positive("recheck margin factor", self.recheck_margin.factor())
    }

    /// The avoidance step bound: the explicit value, or the number of steps needed
    /// to cross the full diagonal width of the corridor, capped at [`MAX_AVOIDANCE_STEPS`].
    pub fn avoidance_limit(&self) -> usize {
        self.max_avoidance_steps.unwrap_or_else(|| {
            let width = 2.0 * self.delta * std::f64::consts::SQRT_2;
            let steps = (width / self.step_size).ceil();
            if steps >= MAX_AVOIDANCE_STEPS as f64 {
                MAX_AVOIDANCE_STEPS
            } else {
                usize::max(steps as usize, 1)
            }
        })
    }
}

/// One emitted point of the planned trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    /// The index along the nominal path.
    pub index: usize,
    /// The emitted position.
    pub pos: Point2d,
    /// The obstacle that caused this point to be displaced, if any.
    pub avoided: Option<usize>,
}

/// Plans a path from a start point to a goal point around a set of obstacles.
///
/// Each index of the nominal path is processed once, in order. If an obstacle is
/// found within the lookahead window, the point at the current index is pushed
/// towards one side of the corridor until it is clear.
#[derive(Clone, Debug)]
pub struct Planner {
    config: PlannerConfig,
    obstacles: Vec<Obstacle>,
    corridor: Corridor,
    nominal: SampledPath,
    upper: SampledPath,
    lower: SampledPath,
    resolver: AvoidanceResolver,
}

impl Planner {
    /// Sets up a planning run, building the corridor and sampling the nominal path
    /// and both boundaries.
    pub fn new(
        start: Point2d,
        goal: Point2d,
        obstacles: Vec<Obstacle>,
        config: PlannerConfig,
    ) -> Result<Self> {
        config.validate()?;
        ensure_finite("start", start)?;
        ensure_finite("goal", goal)?;
        let corridor = Corridor::build(start, goal, config.delta)?;
        let nominal = sample(start, goal, config.steps)?;
        let (upper, lower) = corridor.sample(config.steps)?;
        let resolver = AvoidanceResolver {
            step_size: config.step_size,
            max_steps: config.avoidance_limit(),
            margin: config.recheck_margin,
        };

        #[cfg(feature = "debug")]
        {
            debug_line("upper", corridor.upper.start(), corridor.upper.end());
            debug_line("lower", corridor.lower.start(), corridor.lower.end());
            for obs in &obstacles {
                debug_rect("obstacle", obs.origin(), obs.width(), obs.height());
            }
        }

        debug!(
            "planning {} samples around {} obstacles",
            config.steps,
            obstacles.len()
        );

        Ok(Self {
            config,
            obstacles,
            corridor,
            nominal,
            upper,
            lower,
            resolver,
        })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The corridor boundaries, for visualisation.
    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    /// The straight-line path from start to goal, ignoring obstacles.
    pub fn nominal(&self) -> &SampledPath {
        &self.nominal
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Returns an iterator which plans and emits one waypoint per index.
    ///
    /// The iterator stops after the first error; waypoints already emitted remain valid.
    pub fn waypoints(&self) -> Waypoints<'_> {
        Waypoints {
            planner: self,
            index: 0,
            failed: false,
        }
    }

    /// Plans the full trajectory.
    pub fn plan(&self) -> Result<Vec<Waypoint>> {
        self.waypoints().collect()
    }

    /// Computes the waypoint at a single index.
    fn plan_index(&self, index: usize) -> Result<Waypoint> {
        let nominal = self.nominal[index];
        let outcome = scan(
            index,
            &self.nominal,
            &self.obstacles,
            self.config.lookahead,
            self.config.scan_margin,
        );

        let waypoint = match outcome {
            ScanOutcome::Clear => Waypoint {
                index,
                pos: nominal,
                avoided: None,
            },
            ScanOutcome::Blocked { sample, obstacle } => {
                debug!("index {index}: sample {sample} hits obstacle {obstacle}");
                let pos = self
                    .resolver
                    .resolve(
                        nominal,
                        self.upper[index],
                        self.lower[index],
                        &self.obstacles[obstacle],
                        &self.obstacles,
                    )
                    .map_err(|Blocked { last, steps }| {
                        warn!("index {index}: no clear point after {steps} avoidance steps");
                        PlanError::PathBlocked { index, last, steps }
                    })?;

                #[cfg(feature = "debug")]
                debug_point("avoided", pos);

                Waypoint {
                    index,
                    pos,
                    avoided: Some(obstacle),
                }
            }
        };

        trace!("index {index}: ({:.2}, {:.2})", waypoint.pos.x, waypoint.pos.y);
        Ok(waypoint)
    }
}

/// An iterator over the waypoints of a plan. See [`Planner::waypoints`].
pub struct Waypoints<'a> {
    planner: &'a Planner,
    index: usize,
    failed: bool,
}

impl Iterator for Waypoints<'_> {
    type Item = Result<Waypoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.planner.nominal.len() {
            return None;
        }
        let result = self.planner.plan_index(self.index);
        self.failed = result.is_err();
        self.index += 1;
        Some(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn start_goal() -> (Point2d, Point2d) {
        (Point2d::new(10.0, 10.0), Point2d::new(90.0, 90.0))
    }

    #[test]
    fn default_avoidance_limit_spans_corridor() {
        let config = PlannerConfig::default();
        // 2 * 10 * sqrt(2) / 0.1 = 282.8...
        assert_eq!(config.avoidance_limit(), 283);
        let config = PlannerConfig {
            max_avoidance_steps: Some(7),
            ..Default::default()
        };
        assert_eq!(config.avoidance_limit(), 7);
        let config = PlannerConfig {
            step_size: 1e-20,
            ..Default::default()
        };
        assert_eq!(config.avoidance_limit(), MAX_AVOIDANCE_STEPS);
    }

    #[test]
    fn rejects_invalid_config() {
        let (start, goal) = start_goal();
        let invalid = [
            PlannerConfig {
                steps: 1,
                ..Default::default()
            },
            PlannerConfig {
                lookahead: 0,
                ..Default::default()
            },
            PlannerConfig {
                delta: 0.0,
                ..Default::default()
            },
            PlannerConfig {
                step_size: -0.1,
                ..Default::default()
            },
            PlannerConfig {
                max_avoidance_steps: Some(0),
                ..Default::default()
            },
            PlannerConfig {
                recheck_margin: MarginPolicy::Symmetric { factor: 0.0 },
                ..Default::default()
            },
        ];
        for config in invalid {
            assert!(matches!(
                Planner::new(start, goal, vec![], config),
                Err(PlanError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn rejects_non_finite_endpoints() {
        let (start, goal) = start_goal();
        let nan = Point2d::new(f64::NAN, 10.0);
        let inf = Point2d::new(90.0, f64::NEG_INFINITY);
        for (start, goal) in [(nan, goal), (start, inf)] {
            assert!(matches!(
                Planner::new(start, goal, vec![], PlannerConfig::default()),
                Err(PlanError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn lookahead_displaces_points_before_obstacle() {
        let (start, goal) = start_goal();
        let obs = Obstacle::new(Point2d::new(50.0, 50.0), 5.0, 5.0).unwrap();
        let planner = Planner::new(start, goal, vec![obs], Default::default()).unwrap();
        let plan = planner.plan().unwrap();

        // Sample 50 is the first inside the obstacle, so 46 is the first to see it
        assert_eq!(plan[45].avoided, None);
        assert_eq!(plan[45].pos, planner.nominal()[45]);
        assert_eq!(plan[46].avoided, Some(0));
        assert_ne!(plan[46].pos, planner.nominal()[46]);
        assert_eq!(plan[58].avoided, Some(0));
        assert_eq!(plan[59].avoided, None);
    }

    #[test]
    fn waypoints_stop_after_failure() {
        let (start, goal) = start_goal();
        let wall = Obstacle::new(Point2d::new(-100.0, 60.0), 300.0, 300.0).unwrap();
        let planner = Planner::new(start, goal, vec![wall], Default::default()).unwrap();

        let results = planner.waypoints().collect::<Vec<_>>();
        let (last, prefix) = results.split_last().unwrap();
        assert!(prefix.iter().all(|r| r.is_ok()));
        match last {
            Err(PlanError::PathBlocked { index, steps, .. }) => {
                assert_eq!(*index, prefix.len());
                assert_eq!(*steps, 283);
            }
            other => panic!("expected PathBlocked, got {other:?}"),
        }
    }
}
