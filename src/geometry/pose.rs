use crate::math::angle::ray_slope;
use crate::math::Point2;

/// Camera position and viewing angle.
///
/// `angle_degrees` is measured from the horizontal with downward positive.
/// Any real value is accepted; no wraparound normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Point2,
    pub angle_degrees: f64,
}

impl CameraPose {
    /// Creates a new camera pose.
    #[must_use]
    pub fn new(x: f64, y: f64, angle_degrees: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            angle_degrees,
        }
    }

    /// Returns a copy of this pose rotated to `angle_degrees`.
    #[must_use]
    pub fn with_angle(self, angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            ..self
        }
    }

    /// Slope of the camera ray, or `None` if the ray is vertical.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        ray_slope(self.angle_degrees)
    }
}
