pub mod body;
pub mod clock;
pub mod error;
pub mod hippopede;
pub mod orbits;
pub mod presets;
pub mod scene;
pub mod spheres;

pub use body::{CelestialBody, MotionModel};
pub use clock::{rates, SimulationClock};
pub use error::{ModelError, SimResult};
pub use hippopede::HippopedeOrbit;
pub use orbits::{CircularOrbit, DeferentEpicycle, EccentricOrbit, TusiCouple};
pub use scene::{BodyState, Scene, SceneSnapshot};
pub use spheres::{SphereLayer, SphereStack};
