use crate::geometry::{CameraPose, RoadProfile};
use crate::math::angle::ray_slope;
use crate::math::crossing_2d::{crossing_parameter, lerp, line_y_at, offsets_cross};
use crate::math::distance_2d::point_distance;
use crate::math::Point2;

/// First crossing of a camera ray with a road profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Crossing point, on both the ray line and the matching segment.
    pub point: Point2,
    /// Euclidean distance from the camera to `point`.
    pub distance: f64,
    /// Index `i` of the matching segment `(x[i], y[i]) → (x[i+1], y[i+1])`.
    pub segment_index: usize,
}

impl Intersection {
    /// Returns `(x, y, distance)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.point.x, self.point.y, self.distance)
    }
}

/// Finds the first crossing of the camera ray with a profile.
///
/// The ray is treated as the infinite line through the camera with the
/// camera's slope. Segments are scanned left to right in stored order and the
/// first one whose signed vertical offsets to the line change sign (or touch
/// zero) wins. Segments whose end x is at or behind `camera_x` are skipped, so
/// a segment straddling the camera is still tested.
///
/// Returns `None` for a vertical ray, when every segment is behind the camera,
/// or when the line passes entirely above or below the profile.
///
/// The coordinate slices are expected to have equal length; only their common
/// prefix is scanned otherwise.
#[must_use]
pub fn find_intersection(
    x_profile: &[f64],
    y_profile: &[f64],
    angle_degrees: f64,
    camera_x: f64,
    camera_y: f64,
) -> Option<Intersection> {
    let Some(slope) = ray_slope(angle_degrees) else {
        tracing::trace!(angle_degrees, "vertical ray, no intersection");
        return None;
    };
    let camera = Point2::new(camera_x, camera_y);

    let segments = x_profile.windows(2).zip(y_profile.windows(2)).enumerate();
    for (segment_index, (xw, yw)) in segments {
        let p1 = Point2::new(xw[0], yw[0]);
        let p2 = Point2::new(xw[1], yw[1]);

        if p2.x <= camera_x {
            continue;
        }

        let diff1 = line_y_at(&camera, slope, p1.x) - p1.y;
        let diff2 = line_y_at(&camera, slope, p2.x) - p2.y;
        if !offsets_cross(diff1, diff2) {
            continue;
        }

        let t = crossing_parameter(diff1, diff2);
        let point = lerp(&p1, &p2, t);
        let distance = point_distance(&camera, &point);
        tracing::trace!(segment_index, x = point.x, y = point.y, distance, "ray hit profile");
        return Some(Intersection {
            point,
            distance,
            segment_index,
        });
    }

    tracing::trace!(angle_degrees, camera_x, camera_y, "ray missed profile");
    None
}

impl RoadProfile {
    /// Finds the first crossing of the camera ray described by `pose`.
    #[must_use]
    pub fn intersect(&self, pose: &CameraPose) -> Option<Intersection> {
        find_intersection(
            self.xs(),
            self.ys(),
            pose.angle_degrees,
            pose.position.x,
            pose.position.y,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::in_segment_bounds;
    use approx::assert_abs_diff_eq;

    fn assert_on_ray(hit: &Intersection, angle: f64, cx: f64, cy: f64) {
        let slope = ray_slope(angle).unwrap();
        let expected = line_y_at(&Point2::new(cx, cy), slope, hit.point.x);
        assert_abs_diff_eq!(hit.point.y, expected, epsilon = 1e-9);
    }

    #[test]
    fn sloped_profile_is_hit() {
        let x = [0.0, 10.0, 20.0, 30.0];
        let y = [0.0, 2.0, 4.0, 6.0];
        let hit = find_intersection(&x, &y, 10.0, 0.0, 10.0).unwrap();
        assert!((0.0..=30.0).contains(&hit.point.x));
        assert!(hit.distance > 0.0);
        assert_eq!(hit.segment_index, 2);
        assert_on_ray(&hit, 10.0, 0.0, 10.0);
    }

    #[test]
    fn distance_matches_euclidean_formula() {
        let x = [0.0, 10.0, 20.0, 30.0];
        let y = [0.0, 2.0, 4.0, 6.0];
        let (cx, cy) = (0.0, 10.0);
        let hit = find_intersection(&x, &y, 10.0, cx, cy).unwrap();
        let expected = ((hit.point.x - cx).powi(2) + (hit.point.y - cy).powi(2)).sqrt();
        assert_abs_diff_eq!(hit.distance, expected, epsilon = 1e-9);
    }

    #[test]
    fn hit_lies_within_segment_bounds() {
        let x = [0.0, 5.0, 12.0, 20.0, 33.0];
        let y = [0.0, 1.0, -1.0, 3.0, 2.0];
        let hit = find_intersection(&x, &y, 5.0, 0.0, 2.0).unwrap();
        let i = hit.segment_index;
        let a = Point2::new(x[i], y[i]);
        let b = Point2::new(x[i + 1], y[i + 1]);
        assert!(in_segment_bounds(&hit.point, &a, &b, 1e-9));
    }

    #[test]
    fn upward_ray_away_from_road_misses() {
        let x = [0.0, 10.0, 20.0];
        let y = [0.0, 0.0, 0.0];
        assert!(find_intersection(&x, &y, -30.0, 10.0, 5.0).is_none());
    }

    #[test]
    fn camera_beyond_profile_misses_at_any_angle() {
        let x = [10.0, 20.0, 30.0];
        let y = [0.0, 0.0, 0.0];
        for angle in [-60.0, -10.0, 0.0, 10.0, 45.0, 89.0, 135.0, 200.0] {
            assert!(find_intersection(&x, &y, angle, 40.0, 5.0).is_none(), "angle={angle}");
        }
    }

    #[test]
    fn segment_ending_at_camera_is_skipped() {
        // Segment 0 ends exactly at camera_x and would cross; segment 1 does not.
        let x = [0.0, 10.0, 20.0];
        let y = [10.0, 0.0, -100.0];
        assert!(find_intersection(&x, &y, 0.0, 10.0, 5.0).is_none());
    }

    #[test]
    fn segment_straddling_camera_is_tested() {
        let x = [0.0, 20.0];
        let y = [0.0, 0.0];
        // Horizontal ray at y = 0 through the whole segment: parallel touch at start.
        let hit = find_intersection(&x, &y, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert_abs_diff_eq!(hit.point.x, 0.0);
    }

    #[test]
    fn vertical_rays_never_intersect() {
        let x = [-10.0, 0.0, 10.0];
        let y = [-5.0, -5.0, -5.0];
        for angle in [90.0, 270.0, -90.0, 450.0] {
            assert!(find_intersection(&x, &y, angle, 0.0, 0.0).is_none(), "angle={angle}");
        }
    }

    #[test]
    fn first_segment_wins_over_later_crossings() {
        // Horizontal ray at y = 1 crosses every rising and falling edge.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 2.0, 0.0, 2.0, 0.0];
        let hit = find_intersection(&x, &y, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert_abs_diff_eq!(hit.point.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.point.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn first_match_is_not_nearest_match() {
        // Camera sits right of segment 0's crossing; segment 0 still wins
        // because it straddles the camera.
        let x = [0.0, 10.0, 11.0, 12.0];
        let y = [2.0, 0.0, 2.0, 0.0];
        let hit = find_intersection(&x, &y, 0.0, 9.5, 1.0).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert_abs_diff_eq!(hit.point.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_overlap_reports_segment_start() {
        let x = [2.0, 6.0];
        let y = [1.0, 1.0];
        let hit = find_intersection(&x, &y, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(hit.point, Point2::new(2.0, 1.0));
        assert_abs_diff_eq!(hit.distance, 2.0);
    }

    #[test]
    fn exact_touch_at_segment_end() {
        // 45° downward from (0, 10) reaches (10, 0) exactly at the vertex.
        let x = [0.0, 10.0, 20.0];
        let y = [-5.0, 0.0, -5.0];
        let hit = find_intersection(&x, &y, 45.0, 0.0, 10.0).unwrap();
        assert_abs_diff_eq!(hit.point.x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn ray_above_profile_misses() {
        let x = [0.0, 10.0, 20.0];
        let y = [0.0, 1.0, 0.0];
        assert!(find_intersection(&x, &y, 0.0, 0.0, 5.0).is_none());
    }

    #[test]
    fn profile_behind_camera_misses() {
        let x = [-30.0, -20.0, -10.0];
        let y = [5.0, -5.0, 5.0];
        assert!(find_intersection(&x, &y, 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn mismatched_lengths_scan_common_prefix() {
        let x = [0.0, 10.0, 20.0, 30.0];
        let y = [5.0, 5.0];
        assert!(find_intersection(&x, &y, 0.0, 0.0, 0.0).is_none());
        assert!(find_intersection(&x, &[], 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let x = [0.0, 7.0, 19.0, 30.0];
        let y = [0.0, 1.3, -0.4, 2.2];
        let a = find_intersection(&x, &y, 3.7, 0.0, 2.0).unwrap();
        let b = find_intersection(&x, &y, 3.7, 0.0, 2.0).unwrap();
        assert_eq!(a.point.x.to_bits(), b.point.x.to_bits());
        assert_eq!(a.point.y.to_bits(), b.point.y.to_bits());
        assert_eq!(a.distance.to_bits(), b.distance.to_bits());
    }

    #[test]
    fn profile_intersect_matches_free_function() {
        let profile = RoadProfile::new(vec![0.0, 10.0, 20.0, 30.0], vec![0.0, 2.0, 4.0, 6.0]).unwrap();
        let pose = CameraPose::new(0.0, 10.0, 10.0);
        let from_profile = profile.intersect(&pose).unwrap();
        let direct = find_intersection(profile.xs(), profile.ys(), 10.0, 0.0, 10.0).unwrap();
        assert_eq!(from_profile, direct);
        let (x, y, d) = direct.as_tuple();
        assert_abs_diff_eq!(x, direct.point.x);
        assert_abs_diff_eq!(y, direct.point.y);
        assert_abs_diff_eq!(d, direct.distance);
    }
}
