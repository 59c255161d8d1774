//! Tracked bodies and motion-law dispatch

use crate::error::{require_positive, SimResult};
use crate::hippopede::HippopedeOrbit;
use crate::orbits::{CircularOrbit, DeferentEpicycle, EccentricOrbit, TusiCouple};
use crate::spheres::SphereStack;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Which motion law applies to a body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MotionModel {
    Circular(CircularOrbit),
    Hippopede(HippopedeOrbit),
    NestedSpheres(SphereStack),
    Eccentric(EccentricOrbit),
    DeferentEpicycle(DeferentEpicycle),
    Tusi(TusiCouple),
}

impl MotionModel {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Circular(_) => "circular",
            Self::Hippopede(_) => "hippopede",
            Self::NestedSpheres(_) => "nested-spheres",
            Self::Eccentric(_) => "eccentric",
            Self::DeferentEpicycle(_) => "deferent-epicycle",
            Self::Tusi(_) => "tusi",
        }
    }

    /// Position at simulated time t
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        match self {
            Self::Circular(m) => m.position_at(t),
            Self::Hippopede(m) => m.position_at(t),
            Self::NestedSpheres(m) => m.position_at(t),
            Self::Eccentric(m) => m.position_at(t),
            Self::DeferentEpicycle(m) => m.position_at(t),
            Self::Tusi(m) => m.position_at(t),
        }
    }

    /// Period used for static path sampling
    pub fn reference_period(&self) -> f64 {
        match self {
            Self::Circular(m) => m.period(),
            Self::Hippopede(m) => m.period(),
            Self::NestedSpheres(m) => m.reference_period(),
            Self::Eccentric(m) => m.period(),
            Self::DeferentEpicycle(m) => m.reference_period(),
            Self::Tusi(m) => m.period(),
        }
    }

    /// Ordered points of the static orbit curve, consistent with
    /// `position_at` by construction
    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        match self {
            Self::Circular(m) => m.sample_path(steps),
            Self::Hippopede(m) => m.sample_path(steps),
            Self::NestedSpheres(m) => m.sample_path(steps),
            Self::Eccentric(m) => m.sample_path(steps),
            Self::DeferentEpicycle(m) => m.sample_path(steps),
            Self::Tusi(m) => m.sample_path(steps),
        }
    }
}

/// A named entity animated by the engine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    /// Visual marker size; carried through for the renderer, never used in
    /// position math
    pub body_radius: f64,
    pub model: MotionModel,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, body_radius: f64, model: MotionModel) -> SimResult<Self> {
        require_positive("body_radius", body_radius)?;
        Ok(Self {
            name: name.into(),
            body_radius,
            model,
        })
    }

    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        self.model.position_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_evaluation() {
        let orbit = CircularOrbit::new(10.0, 0.02).unwrap();
        let body = CelestialBody::new("moon", 2.0, MotionModel::Circular(orbit)).unwrap();

        for i in 0..20 {
            let t = i as f64 * 4.2;
            assert_eq!(body.position_at(t), orbit.position_at(t));
        }
    }

    #[test]
    fn test_body_radius_validated() {
        let orbit = CircularOrbit::new(10.0, 0.02).unwrap();
        assert!(CelestialBody::new("moon", -1.0, MotionModel::Circular(orbit)).is_err());
        assert!(CelestialBody::new("moon", f64::NAN, MotionModel::Circular(orbit)).is_err());
    }

    #[test]
    fn test_kind_names() {
        let orbit = CircularOrbit::new(1.0, 1.0).unwrap();
        assert_eq!(MotionModel::Circular(orbit).kind(), "circular");
    }
}
