use crate::math::distance_2d::point_distance;
use crate::math::Point2;

/// The drawn portion of a camera ray: exactly two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySegment {
    pub start: Point2,
    pub end: Point2,
}

impl RaySegment {
    /// Creates a new ray segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the x coordinates `[start.x, end.x]`.
    #[must_use]
    pub fn xs(&self) -> [f64; 2] {
        [self.start.x, self.end.x]
    }

    /// Returns the y coordinates `[start.y, end.y]`.
    #[must_use]
    pub fn ys(&self) -> [f64; 2] {
        [self.start.y, self.end.y]
    }

    /// Returns the larger x coordinate of the two endpoints.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        point_distance(&self.start, &self.end)
    }
}
