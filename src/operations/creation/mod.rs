mod generate_profile;

pub use generate_profile::{
    generate_road_profile, GenerateProfile, DEFAULT_NUM_POINTS, DEFAULT_X_MAX,
};
