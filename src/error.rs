use crate::math::Point2d;
use thiserror::Error;

/// Errors produced while setting up or running a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A step count, corridor width, obstacle dimension or other parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Avoidance could not find a clear point within its iteration bound.
    #[error("path blocked at index {index}: still colliding at {last:?} after {steps} avoidance steps")]
    PathBlocked {
        /// The path index being resolved.
        index: usize,
        /// The last position tried.
        last: Point2d,
        /// The number of displacement steps taken.
        steps: usize,
    },
}

/// Convenience type alias for results using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;

/// Fails with [`PlanError::InvalidArgument`] unless both coordinates are finite.
pub(crate) fn ensure_finite(name: &str, point: Point2d) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidArgument(format!(
            "{name} must have finite coordinates, got {point:?}"
        )))
    }
}

/// Fails with [`PlanError::InvalidArgument`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
