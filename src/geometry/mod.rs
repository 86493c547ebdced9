pub mod pose;
pub mod profile;
pub mod segment;

pub use pose::CameraPose;
pub use profile::RoadProfile;
pub use segment::RaySegment;
