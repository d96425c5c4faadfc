//! A local, greedy planner which steers a 2D path around axis-aligned rectangular obstacles.
//!
//! The straight line from start to goal is sampled at a fixed number of points, and a
//! corridor is built either side of it. Each point is checked against the obstacles a
//! few samples ahead; a point which is about to run into an obstacle is pushed towards
//! the side of the corridor further from that obstacle until it is clear.

pub use avoidance::{AvoidanceResolver, Blocked};
pub use cgmath;
pub use collision::{scan, ScanOutcome};
pub use corridor::Corridor;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::{PlanError, Result};
pub use generator::{JitteredObstacles, ObstacleGenerator};
pub use obstacle::{MarginPolicy, Obstacle};
pub use planner::{Planner, PlannerConfig, Waypoint, Waypoints, MAX_AVOIDANCE_STEPS};
pub use sampler::{sample, SampledPath};
pub use util::Interval;

mod avoidance;
mod collision;
mod corridor;
#[cfg(feature = "debug")]
mod debug;
mod error;
mod generator;
pub mod math;
mod obstacle;
mod planner;
mod sampler;
mod util;
