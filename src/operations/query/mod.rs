mod find_intersection;
mod ray_line;
mod sight_line;

pub use find_intersection::{find_intersection, Intersection};
pub use ray_line::{calculate_ray_line, RayCaster, RayPolicy};
pub use sight_line::SightLine;
