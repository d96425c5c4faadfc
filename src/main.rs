use std::time::{Duration, Instant};

use corridor_planner::math::Point2d;
use corridor_planner::{JitteredObstacles, ObstacleGenerator, Planner, PlannerConfig};

/// Runs the reference scenario.
///
/// Usage: `corridor-planner [seed] [config.json] [pace-ms]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0u64);
    let config = match args.next() {
        Some(path) => serde_json::from_str::<PlannerConfig>(&std::fs::read_to_string(path)?)?,
        None => PlannerConfig::default(),
    };
    let pace = args.next().map(|s| s.parse()).transpose()?.map(Duration::from_millis);

    let start = Point2d::new(10.0, 10.0);
    let goal = Point2d::new(90.0, 90.0);
    let obstacles = JitteredObstacles::seeded(seed).generate(start, goal)?;
    for obs in &obstacles {
        println!(
            "obstacle ({:.2}, {:.2}) {}x{}",
            obs.origin().x,
            obs.origin().y,
            obs.width(),
            obs.height()
        );
    }

    let planner = Planner::new(start, goal, obstacles, config)?;
    let corridor = planner.corridor();
    println!("upper {:?} -> {:?}", corridor.upper.start(), corridor.upper.end());
    println!("lower {:?} -> {:?}", corridor.lower.start(), corridor.lower.end());

    let begin = Instant::now();
    let mut avoided = 0;
    for waypoint in planner.waypoints() {
        let waypoint = waypoint?;
        if waypoint.avoided.is_some() {
            avoided += 1;
        }
        println!("{} {:.2} {:.2}", waypoint.index, waypoint.pos.x, waypoint.pos.y);
        if let Some(pace) = pace {
            std::thread::sleep(pace);
        }
    }
    println!(
        "planned {} waypoints ({} displaced) in {:?}",
        planner.nominal().len(),
        avoided,
        begin.elapsed()
    );
    Ok(())
}
