use super::{Point2d, Vector2d};

/// Rounds `value` to the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Rounds both coordinates of a point to the given number of decimal places.
pub fn round_point(point: Point2d, decimals: i32) -> Point2d {
    Point2d::new(round_to(point.x, decimals), round_to(point.y, decimals))
}

/// Returns -1, 0 or 1 according to the sign of `value`.
///
/// Unlike [`f64::signum`], zero maps to zero.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Applies [`sign`] to each component of a vector.
pub fn sign_vec(vec: Vector2d) -> Vector2d {
    Vector2d::new(sign(vec.x), sign(vec.y))
}
