use std::f64::consts::PI;

use crate::error::{ProfileError, Result};
use crate::geometry::RoadProfile;

/// Number of samples in the demonstration profile.
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Horizontal extent of the demonstration profile in meters.
pub const DEFAULT_X_MAX: f64 = 80.0;

/// Generates a clothoid-like demonstration road profile.
///
/// Samples `num_points` equidistant x values on `[0, x_max]` and evaluates
///
/// ```text
/// x_n = x / x_max
/// y   = 0.015 * x_n³ * x_max + 0.3 * sin(2π x_n) + 0.035 * x_n * x_max
/// ```
///
/// shifted so the profile starts at `y = 0`. The cubic term makes the grade
/// grow with distance, the sine adds a gentle undulation.
#[derive(Debug, Clone, Copy)]
pub struct GenerateProfile {
    num_points: usize,
    x_max: f64,
}

impl Default for GenerateProfile {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            x_max: DEFAULT_X_MAX,
        }
    }
}

impl GenerateProfile {
    /// Creates a new `GenerateProfile` operation.
    #[must_use]
    pub fn new(num_points: usize, x_max: f64) -> Self {
        Self { num_points, x_max }
    }

    /// Executes the operation, returning the sampled profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidParameter`] if `num_points < 2` or
    /// `x_max` is not finite and positive.
    pub fn execute(&self) -> Result<RoadProfile> {
        if self.num_points < 2 {
            return Err(ProfileError::InvalidParameter(format!(
                "num_points must be at least 2, got {}",
                self.num_points
            ))
            .into());
        }
        if !self.x_max.is_finite() || self.x_max <= 0.0 {
            return Err(ProfileError::InvalidParameter(format!(
                "x_max must be finite and positive, got {}",
                self.x_max
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let last = (self.num_points - 1) as f64;
        let xs: Vec<f64> = (0..self.num_points)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                self.x_max * i / last
            })
            .collect();

        let raw: Vec<f64> = xs.iter().map(|&x| self.height_at(x)).collect();
        let y0 = raw[0];
        let ys = raw.into_iter().map(|y| y - y0).collect();

        tracing::debug!(
            num_points = self.num_points,
            x_max = self.x_max,
            "generated road profile"
        );
        RoadProfile::new(xs, ys)
    }

    fn height_at(&self, x: f64) -> f64 {
        let x_norm = x / self.x_max;
        0.015 * x_norm.powi(3) * self.x_max
            + 0.3 * (2.0 * PI * x_norm).sin()
            + 0.035 * x_norm * self.x_max
    }
}

/// Generates the demonstration profile with `num_points` samples over
/// `[0, x_max]`.
///
/// # Errors
///
/// See [`GenerateProfile::execute`].
pub fn generate_road_profile(num_points: usize, x_max: f64) -> Result<RoadProfile> {
    GenerateProfile::new(num_points, x_max).execute()
}
