pub mod angle;
pub mod crossing_2d;
pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Used both for the vertical-ray test on `cos θ` and for the
/// near-parallel test on the vertical offset difference.
pub const TOLERANCE: f64 = 1e-10;
