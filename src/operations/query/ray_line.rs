use crate::error::{PolicyError, Result};
use crate::geometry::{CameraPose, RaySegment};
use crate::math::angle::points_upward;
use crate::math::crossing_2d::line_y_at;
use crate::math::Point2;

/// Presentation parameters for the drawn camera ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayPolicy {
    /// Maximum horizontal extent of a ray in the upward regime.
    upward_preview_length: f64,
    /// Length of the straight-down segment drawn for a vertical ray.
    vertical_drop: f64,
}

impl Default for RayPolicy {
    fn default() -> Self {
        Self {
            upward_preview_length: 20.0,
            vertical_drop: 10.0,
        }
    }
}

impl RayPolicy {
    /// Creates a new ray policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidParameter`] if either length is not
    /// finite and strictly positive.
    pub fn new(upward_preview_length: f64, vertical_drop: f64) -> Result<Self> {
        check_length("upward_preview_length", upward_preview_length)?;
        check_length("vertical_drop", vertical_drop)?;
        Ok(Self {
            upward_preview_length,
            vertical_drop,
        })
    }

    /// Returns the upward preview length.
    #[must_use]
    pub fn upward_preview_length(&self) -> f64 {
        self.upward_preview_length
    }

    /// Returns the vertical drop length.
    #[must_use]
    pub fn vertical_drop(&self) -> f64 {
        self.vertical_drop
    }
}

fn check_length(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PolicyError::InvalidParameter { parameter, value }.into());
    }
    Ok(())
}

/// Computes the visible segment of a camera ray.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCaster {
    policy: RayPolicy,
}

impl RayCaster {
    /// Creates a ray caster with the given presentation policy.
    #[must_use]
    pub fn new(policy: RayPolicy) -> Self {
        Self { policy }
    }

    /// Returns the presentation policy.
    #[must_use]
    pub fn policy(&self) -> &RayPolicy {
        &self.policy
    }

    /// Casts the ray for `pose`, clipping it horizontally at `x_max`.
    ///
    /// - Vertical ray: straight down by `vertical_drop`, independent of `x_max`.
    /// - Upward regime (`angle < 0` or `angle > 180`): ends at
    ///   `min(camera_x + upward_preview_length, x_max)`.
    /// - Otherwise: ends at `x_max`.
    ///
    /// The result may have zero length when the end x equals the camera x.
    #[must_use]
    pub fn cast(&self, pose: &CameraPose, x_max: f64) -> RaySegment {
        let origin = pose.position;
        let Some(slope) = pose.slope() else {
            return RaySegment::new(
                origin,
                Point2::new(origin.x, origin.y - self.policy.vertical_drop),
            );
        };

        let x_end = if points_upward(pose.angle_degrees) {
            (origin.x + self.policy.upward_preview_length).min(x_max)
        } else {
            x_max
        };

        RaySegment::new(origin, Point2::new(x_end, line_y_at(&origin, slope, x_end)))
    }
}

/// Computes the visible camera ray with the default [`RayPolicy`].
#[must_use]
pub fn calculate_ray_line(angle_degrees: f64, camera_x: f64, camera_y: f64, x_max: f64) -> RaySegment {
    RayCaster::default().cast(&CameraPose::new(camera_x, camera_y, angle_degrees), x_max)
}
