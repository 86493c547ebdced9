use super::{Point2, TOLERANCE};

/// Height of the line `y = origin.y + slope * (x - origin.x)` at `x`.
#[must_use]
pub fn line_y_at(origin: &Point2, slope: f64, x: f64) -> f64 {
    origin.y + slope * (x - origin.x)
}

/// Returns `true` if the signed offsets at both ends of a segment change sign
/// or touch zero.
#[must_use]
pub fn offsets_cross(diff1: f64, diff2: f64) -> bool {
    diff1 * diff2 <= 0.0
}

/// Segment parameter where the signed offset goes from `diff1` to zero.
///
/// When `|diff2 - diff1| < TOLERANCE` the line runs parallel to the segment
/// and the start of the segment (`t = 0`) is reported.
#[must_use]
pub fn crossing_parameter(diff1: f64, diff2: f64) -> f64 {
    if (diff2 - diff1).abs() < TOLERANCE {
        0.0
    } else {
        diff1 / (diff1 - diff2)
    }
}

/// Linear interpolation between `a` and `b`: `a + t * (b - a)`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
}
