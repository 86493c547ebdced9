//! Camera sight-line geometry against 2D road profiles.
//!
//! Two pure operations make up the core:
//!
//! - [`calculate_ray_line`] computes the drawn segment of a camera ray.
//! - [`find_intersection`] finds the first crossing of the ray's line with a
//!   piecewise-linear road profile, scanning segments left to right.
//!
//! [`SightLine`] combines both the way a viewer displays them, and
//! [`generate_road_profile`] builds a demonstration profile.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, SightlineError};
pub use geometry::{CameraPose, RaySegment, RoadProfile};
pub use operations::creation::generate_road_profile;
pub use operations::query::{
    calculate_ray_line, find_intersection, Intersection, RayCaster, RayPolicy, SightLine,
};
