//! Sweeps the camera angle over the generated demonstration profile and logs
//! each resolved sight line.
//!
//! ```text
//! cargo run --example sweep
//! RUST_LOG=sightline=trace cargo run --example sweep
//! ```

use sightline::operations::creation::GenerateProfile;
use sightline::{CameraPose, RayCaster, SightLine, SightlineError};

fn main() -> Result<(), SightlineError> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=sightline=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sweep=info".parse().unwrap_or_default())
        .add_directive("sightline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let profile = GenerateProfile::default().execute()?;
    let caster = RayCaster::default();
    let camera = CameraPose::new(0.0, 2.0, -1.1);

    for step in -4..=18 {
        let pose = camera.with_angle(f64::from(step) * 5.0);
        let sight = SightLine::resolve(&profile, &pose, &caster);
        match sight.intersection {
            Some(hit) => tracing::info!(
                angle = pose.angle_degrees,
                x = hit.point.x,
                y = hit.point.y,
                distance = hit.distance,
                segment = hit.segment_index,
                "hit"
            ),
            None => tracing::info!(
                angle = pose.angle_degrees,
                end_x = sight.ray.end.x,
                end_y = sight.ray.end.y,
                "no intersection"
            ),
        }
    }
    Ok(())
}
