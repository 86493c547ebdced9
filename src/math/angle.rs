use super::TOLERANCE;

/// Converts a camera angle (degrees, downward positive) to the ray angle in
/// radians measured counter-clockwise from +x with y pointing up.
#[must_use]
pub fn ray_angle(angle_degrees: f64) -> f64 {
    -angle_degrees.to_radians()
}

/// Returns `true` if a ray at angle `theta` (radians) is vertical within
/// [`TOLERANCE`].
#[must_use]
pub fn is_vertical(theta: f64) -> bool {
    theta.cos().abs() < TOLERANCE
}

/// Returns the slope `dy/dx` of the camera ray, or `None` for a vertical ray.
#[must_use]
pub fn ray_slope(angle_degrees: f64) -> Option<f64> {
    let theta = ray_angle(angle_degrees);
    if is_vertical(theta) {
        return None;
    }
    Some(theta.tan())
}

/// Returns `true` if the angle falls in the upward-preview regime
/// (`angle < 0` or `angle > 180`).
///
/// No wraparound normalization is performed: `-30` and `330` are classified
/// independently.
#[must_use]
pub fn points_upward(angle_degrees: f64) -> bool {
    angle_degrees < 0.0 || angle_degrees > 180.0
}
