//! Historical model configurations
//!
//! Parameter values follow the interactive demos this engine was extracted
//! from; where a demo left a model as a placeholder, the values here are
//! chosen to match the demo's scene scale.

use crate::body::{CelestialBody, MotionModel};
use crate::error::SimResult;
use crate::hippopede::HippopedeOrbit;
use crate::orbits::{CircularOrbit, DeferentEpicycle, EccentricOrbit, TusiCouple};
use crate::scene::Scene;
use crate::spheres::{SphereLayer, SphereStack};
use nalgebra::Vector3;
use orrery_core::constants::OBLIQUITY;

/// The four-sphere Eudoxan set: Fixed Stars, Ecliptic, and the two synodic
/// spheres carrying the planet
///
/// Speeds and shell radii are the demo's values. The fixed-stars sphere
/// turns about the celestial axis; the ecliptic sphere is inclined by the
/// obliquity; the counter-rotating synodic pair is inclined once more so
/// the composition produces the retrograde wobble.
pub fn eudoxus_stack() -> SimResult<SphereStack> {
    let celestial_axis = Vector3::y();
    let ecliptic_axis = Vector3::new(OBLIQUITY.sin(), OBLIQUITY.cos(), 0.0);
    let synodic_axis = Vector3::new(OBLIQUITY.sin(), OBLIQUITY.cos(), OBLIQUITY.sin());

    SphereStack::new(vec![
        SphereLayer::new(celestial_axis, 0.001, 35.0)?,  // Fixed Stars
        SphereLayer::new(ecliptic_axis, 0.0008, 30.0)?,  // Ecliptic
        SphereLayer::new(synodic_axis, 0.0012, 25.0)?,   // Synodic 1
        SphereLayer::new(synodic_axis, -0.0012, 20.0)?,  // Synodic 2
    ])
}

/// The hippopede demo orbit
pub fn hippopede_demo() -> SimResult<HippopedeOrbit> {
    HippopedeOrbit::new(3.0, OBLIQUITY, 0.02)
}

/// Deferent+epicycle set with a 7:1 speed ratio, showing seven retrograde
/// loops per deferent revolution
pub fn retrograde_set() -> SimResult<DeferentEpicycle> {
    DeferentEpicycle::new(20.0, 0.02, 5.0, 0.14)
}

/// Eccentric solar orbit: offset of 1/24th of the orbit radius, after
/// Hipparchus' solar model
pub fn eccentric_sun() -> SimResult<EccentricOrbit> {
    let radius = 30.0;
    EccentricOrbit::new(radius, Vector3::new(radius / 24.0, 0.0, 0.0), 0.001)
}

/// Classic 2:1 Tusi couple
pub fn tusi_demo() -> SimResult<TusiCouple> {
    TusiCouple::new(10.0, 5.0, 0.02)
}

/// One body per motion law, at the demos' marker sizes
pub fn demo_scene() -> SimResult<Scene> {
    let mut scene = Scene::new();

    scene.add_body(CelestialBody::new(
        "moon",
        2.0,
        MotionModel::Circular(CircularOrbit::new(15.0, 0.005)?),
    )?)?;
    scene.add_body(CelestialBody::new(
        "sun",
        1.0,
        MotionModel::Eccentric(eccentric_sun()?),
    )?)?;
    scene.add_body(CelestialBody::new(
        "mars-hippopede",
        0.05,
        MotionModel::Hippopede(hippopede_demo()?),
    )?)?;
    scene.add_body(CelestialBody::new(
        "mars-epicycle",
        1.0,
        MotionModel::DeferentEpicycle(retrograde_set()?),
    )?)?;
    scene.add_body(CelestialBody::new(
        "eudoxus-planet",
        1.0,
        MotionModel::NestedSpheres(eudoxus_stack()?),
    )?)?;
    scene.add_body(CelestialBody::new(
        "tusi-point",
        0.5,
        MotionModel::Tusi(tusi_demo()?),
    )?)?;

    Ok(scene)
}
