// main.rs
//
// Builds a few representative racks and writes them to stl/.
// Set RUST_LOG=debug to follow every build stage.

use rackgen::{GearingParameters, ProfileBuilder};
use std::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Ensure the /stl folder exists
    let _ = fs::create_dir_all("stl");

    let straight = GearingParameters::default();

    let helical = GearingParameters {
        helix_angle: (15.0_f64).to_radians() as _,
        height: 10.0,
        head_fillet: 0.1,
        root_fillet: 0.2,
        ..Default::default()
    };

    let herringbone = GearingParameters {
        module: 2.0,
        num_teeth: 20,
        helix_angle: (10.0_f64).to_radians() as _,
        double_helix: true,
        height: 10.0,
        properties_from_tool: true,
        ..Default::default()
    };

    for (name, params) in [
        ("rack_straight", straight),
        ("rack_helical", helical),
        ("rack_herringbone", herringbone),
    ] {
        let build = match ProfileBuilder::new(&params).build() {
            Ok(build) => build,
            Err(e) => {
                error!(name, error = %e, "rack build failed");
                continue;
            },
        };
        let Some(solid) = build.shape.solid() else {
            info!(name, "outline only, nothing to export");
            continue;
        };
        info!(
            name,
            pitch = build.properties.transverse_pitch,
            volume = solid.volume(),
            "built rack"
        );

        let path = format!("stl/{name}.stl");
        match solid.to_stl_binary(name) {
            Ok(bytes) => {
                if let Err(e) = fs::write(&path, bytes) {
                    error!(%path, error = %e, "could not write stl");
                }
            },
            Err(e) => error!(name, error = %e, "stl encoding failed"),
        }
    }
}
