use crate::geometry::{CameraPose, RaySegment, RoadProfile};

use super::find_intersection::Intersection;
use super::ray_line::RayCaster;

/// The ray to display for a camera pose together with its crossing, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightLine {
    /// Segment to draw: camera to crossing on a hit, the cast ray otherwise.
    pub ray: RaySegment,
    /// First crossing with the profile.
    pub intersection: Option<Intersection>,
}

impl SightLine {
    /// Resolves the displayed ray for `pose` against `profile`.
    ///
    /// On a hit the ray ends at the crossing point. On a miss it falls back
    /// to `caster`, clipped at the profile's largest x.
    #[must_use]
    pub fn resolve(profile: &RoadProfile, pose: &CameraPose, caster: &RayCaster) -> Self {
        let intersection = profile.intersect(pose);
        let ray = match &intersection {
            Some(hit) => RaySegment::new(pose.position, hit.point),
            None => caster.cast(pose, profile.x_max()),
        };
        tracing::debug!(
            angle = pose.angle_degrees,
            hit = intersection.is_some(),
            end_x = ray.end.x,
            end_y = ray.end.y,
            "resolved sight line"
        );
        Self { ray, intersection }
    }

    /// Distance from the camera to the crossing, if any.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.intersection.map(|hit| hit.distance)
    }
}
