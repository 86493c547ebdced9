use crate::error::{ProfileError, Result};
use crate::math::Point2;

/// A road profile: an open polyline stored as parallel x and y coordinates.
///
/// Vertices are expected in ascending-x order. This is reported by
/// [`RoadProfile::is_x_ascending`] but not enforced; intersection queries scan
/// segments in stored order regardless.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadProfile {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl RoadProfile {
    /// Creates a profile from parallel coordinate lists.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::TooFewVertices`] if either list has fewer than
    /// 2 entries, [`ProfileError::LengthMismatch`] if the lists differ in
    /// length, and [`ProfileError::NonFinite`] for NaN or infinite values.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        check_axis("x", &xs)?;
        check_axis("y", &ys)?;
        if xs.len() != ys.len() {
            return Err(ProfileError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            }
            .into());
        }
        Ok(Self { xs, ys })
    }

    /// Creates a profile from a list of points.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RoadProfile::new`].
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let xs = points.iter().map(|p| p.x).collect();
        let ys = points.iter().map(|p| p.y).collect();
        Self::new(xs, ys)
    }

    /// Returns the x coordinates.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the y coordinates.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the number of vertices (always at least 2).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of segments between consecutive vertices.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.xs.len() - 1
    }

    /// Returns the vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Point2> {
        Some(Point2::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// Iterates over the vertices in stored order.
    pub fn vertices(&self) -> impl Iterator<Item = Point2> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point2::new(x, y))
    }

    /// Returns the largest x coordinate of the profile.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns `true` if the x coordinates are strictly increasing.
    #[must_use]
    pub fn is_x_ascending(&self) -> bool {
        self.xs.windows(2).all(|w| w[0] < w[1])
    }
}

fn check_axis(axis: &'static str, values: &[f64]) -> Result<()> {
    if values.len() < 2 {
        return Err(ProfileError::TooFewVertices {
            axis,
            count: values.len(),
        }
        .into());
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ProfileError::NonFinite { axis, index }.into());
    }
    Ok(())
}
