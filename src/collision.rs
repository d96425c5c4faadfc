use crate::obstacle::{MarginPolicy, Obstacle};
use crate::sampler::SampledPath;
use itertools::iproduct;

/// The result of a lookahead scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No sample in the window touches an obstacle.
    Clear,
    /// A sample in the window lies within an obstacle.
    Blocked {
        /// The index of the offending sample on the path.
        sample: usize,
        /// The index of the obstacle that was hit.
        obstacle: usize,
    },
}

impl ScanOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, ScanOutcome::Blocked { .. })
    }

    /// The index of the obstacle that was hit, if any.
    pub fn obstacle(&self) -> Option<usize> {
        match *self {
            ScanOutcome::Clear => None,
            ScanOutcome::Blocked { obstacle, .. } => Some(obstacle),
        }
    }
}

/// Checks the `lookahead` samples starting at `index` (clamped to the end of the path)
/// against every obstacle.
///
/// Samples are visited in path order and, for each sample, obstacles in list order;
/// the first hit is reported.
pub fn scan(
    index: usize,
    path: &SampledPath,
    obstacles: &[Obstacle],
    lookahead: usize,
    margin: MarginPolicy,
) -> ScanOutcome {
    let end = usize::min(index.saturating_add(lookahead), path.len());
    let window = index.min(end)..end;
    iproduct!(window, obstacles.iter().enumerate())
        .find(|(sample, (_, obs))| obs.contains(path[*sample], margin))
        .map_or(ScanOutcome::Clear, |(sample, (obstacle, _))| {
            ScanOutcome::Blocked { sample, obstacle }
        })
}
