//! Sources of obstacles for a planning run.

use crate::error::Result;
use crate::math::Point2d;
use crate::obstacle::Obstacle;
use crate::sampler::sample;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the obstacles for a run between `start` and `goal`.
pub trait ObstacleGenerator {
    fn generate(&mut self, start: Point2d, goal: Point2d) -> Result<Vec<Obstacle>>;
}

/// A fixed list of obstacles, returned unchanged.
impl ObstacleGenerator for Vec<Obstacle> {
    fn generate(&mut self, _start: Point2d, _goal: Point2d) -> Result<Vec<Obstacle>> {
        Ok(self.clone())
    }
}

/// Places fixed-size obstacles at randomly jittered positions along the nominal path.
///
/// A random number of evenly spaced points is sampled between start and goal; the two
/// end points are dropped and an obstacle is placed at each remaining point after
/// shifting both of its coordinates by a random amount.
#[derive(Clone, Debug)]
pub struct JitteredObstacles<R> {
    rng: R,
    /// The number of points sampled, drawn from `count.0..count.1`.
    pub count: (usize, usize),
    /// The obstacle width.
    pub width: f64,
    /// The obstacle height.
    pub height: f64,
    /// The scale of the random shift applied to each coordinate.
    pub max_shift: f64,
    /// The shift is multiplied by an integer drawn from `0..shift_multiplier`.
    pub shift_multiplier: u32,
}

impl<R: Rng> JitteredObstacles<R> {
    /// Creates a generator with the default placement parameters.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            count: (4, 10),
            width: 5.0,
            height: 5.0,
            max_shift: 1.5,
            shift_multiplier: 8,
        }
    }

    /// Shifts a coordinate by a random signed amount.
    fn jitter(&mut self, coord: f64) -> f64 {
        let multiplier = self.rng.gen_range(0..self.shift_multiplier.max(1)) as f64;
        let amount = self.rng.gen::<f64>() * self.max_shift;
        let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        coord + sign * amount * multiplier
    }
}

impl JitteredObstacles<StdRng> {
    /// Creates a reproducible generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ObstacleGenerator for JitteredObstacles<R> {
    fn generate(&mut self, start: Point2d, goal: Point2d) -> Result<Vec<Obstacle>> {
        let (min, max) = self.count;
        let count = if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        if count < 3 {
            // Nothing is left once both ends are dropped
            return Ok(vec![]);
        }

        let points = sample(start, goal, count)?;
        let obstacles = points.points()[1..count - 1]
            .iter()
            .map(|point| {
                let origin = Point2d::new(self.jitter(point.x), self.jitter(point.y));
                Obstacle::new(origin, self.width, self.height)
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("generated {} obstacles", obstacles.len());
        Ok(obstacles)
    }
}
