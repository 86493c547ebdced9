use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn point_distance(a: &Point2, b: &Point2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns `true` if `p` lies within the axis-aligned bounding box of the
/// segment `a`→`b`, expanded by `tol`.
#[must_use]
pub fn in_segment_bounds(p: &Point2, a: &Point2, b: &Point2, tol: f64) -> bool {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    p.x >= min_x - tol && p.x <= max_x + tol && p.y >= min_y - tol && p.y <= max_y + tol
}
