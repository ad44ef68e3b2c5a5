//! Cycloid animation demo: drives the kinematics core for a few frames and logs
//! what a renderer would draw.
//!
//! Usage:
//! ```text
//! cargo run --example animate                       # fixed pins, reference gear
//! cargo run --example animate -- cycloid            # fixed cycloid
//! cargo run --example animate -- pins 20            # eccentricity 20 (undercut)
//! ```

use cycloid::geometry::Curve2;
use cycloid::simulation::{Simulation, SimulationConfig};
use cycloid::tessellation::{TessellatePinRing, TessellateProfile, TessellationParams};
use cycloid::{CycloidError, GearParameters, KinematicMode};

const FRAMES: usize = 8;

fn main() -> Result<(), CycloidError> {
    // Default: WARN for everything, INFO for the demo and the crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=cycloid=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("animate=info".parse().unwrap_or_default())
        .add_directive("cycloid=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let mode = match args.next().as_deref() {
        Some("cycloid") => KinematicMode::FixedCycloid,
        _ => KinematicMode::FixedPins,
    };
    let mut params = GearParameters::default();
    if let Some(e) = args.next().and_then(|s| s.parse::<f64>().ok()) {
        params = params.with_eccentricity(e)?;
    }

    let config = SimulationConfig {
        angle_step: std::f64::consts::TAU / 16.0,
        mode,
    };
    let mut sim = Simulation::new(params, config)?;
    let derived = *sim.derived();
    tracing::info!(
        %mode,
        ratio = derived.reduction_ratio,
        direction = derived.rotation_direction.label(),
        eccentricity_factor = derived.eccentricity_factor,
        undercut = derived.undercut_warning,
        "gear summary"
    );

    let tess = TessellationParams::default();
    for i in 0..FRAMES {
        // The first frame shows the rest position at input angle zero.
        let frame = if i == 0 { sim.frame() } else { sim.tick() };
        let outline = TessellateProfile::new(sim.parameters(), tess)
            .with_placement(frame.placement)
            .execute()?;
        let pins = TessellatePinRing::new(*sim.parameters(), tess, frame.placement).execute()?;
        tracing::info!(
            input = frame.input_angle,
            output = frame.placement.output_angle(mode),
            disc_x = frame.placement.disc_center.x,
            disc_y = frame.placement.disc_center.y,
            disc_rotation = frame.placement.disc_rotation,
            pin_group_angle = frame.placement.pin_group_angle,
            outline_points = outline.len(),
            pins = pins.len(),
            "frame"
        );
    }

    let profile = cycloid::geometry::CycloidProfile::new(sim.parameters());
    let valley = profile.evaluate(0.0);
    tracing::info!(x = valley.x, y = valley.y, "profile at theta = 0");
    Ok(())
}
