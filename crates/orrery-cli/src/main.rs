use anyhow::Result;
use clap::{Parser, Subcommand};
use orrery_core::constants::OBLIQUITY;
use orrery_sim::{presets, MotionModel, SimulationClock};
use std::f64::consts::PI;
use std::path::PathBuf;
use tracing_subscriber;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Geocentric motion engine inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show demo-scene body positions at a simulated time
    Bodies {
        /// Simulated time
        #[arg(short, long, default_value = "0")]
        time: f64,

        /// Emit JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Export a sampled orbit path as CSV
    SamplePath {
        /// Model to sample: circular, hippopede, spheres, eccentric, epicycle, tusi
        #[arg(short, long)]
        model: String,

        /// Number of path samples
        #[arg(short, long, default_value = "360")]
        steps: usize,

        #[arg(short, long, default_value = "path.csv")]
        output: PathBuf,
    },

    /// Advance the demo scene in real time, printing apparent motion
    Simulate {
        /// Clock speed factor
        #[arg(long, default_value = "0.005")]
        rate: f64,

        /// Duration to simulate (seconds of real time)
        #[arg(long, default_value = "10")]
        duration: f64,
    },

    /// Describe the available models
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bodies { time, json } => {
            let mut scene = presets::demo_scene()?;
            scene.set_time(time);
            let snapshot = scene.snapshot();

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!("Positions at t = {}:", snapshot.time);
                println!("{:<16} {:>12} {:>12} {:>12} {:>10}", "Body", "X", "Y", "Z", "Dist");
                for body in scene.bodies() {
                    let state = &snapshot.states[&body.name];
                    let p = state.position;
                    println!(
                        "{:<16} {:>12.4} {:>12.4} {:>12.4} {:>10.4}",
                        body.name, p.x, p.y, p.z, p.magnitude()
                    );
                }
            }
        }

        Commands::SamplePath { model, steps, output } => {
            let model = parse_model(&model)?;
            let path = model.sample_path(steps);

            let mut w = csv::Writer::from_path(&output)?;
            w.write_record(["x", "y", "z"])?;
            for p in &path {
                w.write_record(&[p.x.to_string(), p.y.to_string(), p.z.to_string()])?;
            }
            w.flush()?;

            println!("Sampled {} points ({}) -> {:?}", path.len(), model.kind(), output);
        }

        Commands::Simulate { rate, duration } => {
            let mut scene = presets::demo_scene()?;
            *scene.clock_mut() = SimulationClock::with_speed_factor(rate);

            let steps = (duration * 10.0) as usize; // 10 updates per second
            let dt = 0.1;

            // Watch the epicycle planet's apparent longitude for direction
            // flips - the retrograde episodes the model exists to show
            let mut previous = apparent_longitude(&scene, "mars-epicycle")?;

            for _ in 0..steps {
                let t = scene.advance(dt);

                let longitude = apparent_longitude(&scene, "mars-epicycle")?;
                // Shortest signed angular step, robust across the ±π wrap
                let delta = (longitude - previous + PI).rem_euclid(2.0 * PI) - PI;
                let direction = if delta >= 0.0 { "direct" } else { "retrograde" };
                previous = longitude;

                println!(
                    "t = {:8.3}: mars-epicycle longitude {:7.2} deg ({})",
                    t,
                    longitude.to_degrees(),
                    direction
                );

                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }

        Commands::Info => {
            println!("Motion models:");
            println!("  circular    uniform circle around the observer");
            println!("  hippopede   tilted figure-eight approximating retrograde motion");
            println!("  spheres     four nested Eudoxan spheres, composed outermost-first");
            println!("  eccentric   uniform circle around an offset center");
            println!("  epicycle    small circle riding a deferent (7:1 demo ratio)");
            println!("  tusi        2:1 rolling couple tracing a straight line");
            println!();
            println!(
                "Demo tilts use the {:.1} deg obliquity of the ecliptic.",
                OBLIQUITY.to_degrees()
            );
            println!("The tusi model implements only the degenerate 2:1 contract;");
            println!("other radius ratios are not implemented.");
        }
    }

    Ok(())
}

/// Demo-scene model lookup for path export
fn parse_model(name: &str) -> Result<MotionModel> {
    Ok(match name {
        "circular" => MotionModel::Circular(orrery_sim::CircularOrbit::new(15.0, 0.005)?),
        "hippopede" => MotionModel::Hippopede(presets::hippopede_demo()?),
        "spheres" => MotionModel::NestedSpheres(presets::eudoxus_stack()?),
        "eccentric" => MotionModel::Eccentric(presets::eccentric_sun()?),
        "epicycle" => MotionModel::DeferentEpicycle(presets::retrograde_set()?),
        "tusi" => MotionModel::Tusi(presets::tusi_demo()?),
        _ => anyhow::bail!(
            "Unknown model '{}'. Use: circular, hippopede, spheres, eccentric, epicycle, tusi",
            name
        ),
    })
}

/// Ecliptic-plane longitude of a body as seen from the observer (radians)
fn apparent_longitude(scene: &orrery_sim::Scene, name: &str) -> Result<f64> {
    let position = scene
        .body_position(name)
        .ok_or_else(|| anyhow::anyhow!("no body named '{}'", name))?;
    Ok(position.z.atan2(position.x))
}
