//! Eudoxan homocentric sphere stacks
//!
//! A body is carried by nested rotating reference frames sharing a common
//! center: the outer sphere rotates the entire frame of the sphere inside
//! it. Composition is outermost-first, per the classical four-sphere sets,
//! and the order is load-bearing.

use crate::error::{require_finite, require_positive, ModelError, SimResult};
use crate::orbits::{period_of, sample_over_period};
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// One rotating layer of a homocentric stack
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereLayer {
    /// Unit rotation axis, expressed in the parent layer's frame
    pub axis: Unit<Vector3<f64>>,
    /// Signed angular speed (radians per simulated time unit)
    pub angular_speed: f64,
    /// Shell radius; drawn by the renderer, and the innermost layer's value
    /// is the carried body's distance from the center
    pub shell_radius: f64,
}

impl SphereLayer {
    pub fn new(axis: Vector3<f64>, angular_speed: f64, shell_radius: f64) -> SimResult<Self> {
        let norm = axis.norm();
        if !norm.is_finite() || norm == 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "axis",
                value: norm,
            });
        }
        require_finite("angular_speed", angular_speed)?;
        require_positive("shell_radius", shell_radius)?;
        Ok(Self {
            axis: Unit::new_normalize(axis),
            angular_speed,
            shell_radius,
        })
    }

    /// Rotation of this layer's frame at simulated time t
    pub fn rotation_at(&self, t: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&self.axis, self.angular_speed * t)
    }
}

/// Ordered stack of nested rotating frames, outermost first
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SphereStack {
    layers: Vec<SphereLayer>,
}

impl SphereStack {
    /// Layer 0 is the outermost sphere. At least one layer is required.
    pub fn new(layers: Vec<SphereLayer>) -> SimResult<Self> {
        if layers.is_empty() {
            return Err(ModelError::InvalidParameter {
                name: "layers",
                value: 0.0,
            });
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[SphereLayer] {
        &self.layers
    }

    /// Distance of the carried body from the common center
    pub fn carry_radius(&self) -> f64 {
        self.layers[self.layers.len() - 1].shell_radius
    }

    /// Composed orientation at simulated time t
    ///
    /// R_total = R_0 · R_1 · … · R_{n-1}: the outermost rotation is applied
    /// last to the carried vector, i.e. it turns every inner frame with it.
    pub fn orientation_at(&self, t: f64) -> UnitQuaternion<f64> {
        self.layers
            .iter()
            .fold(UnitQuaternion::identity(), |acc, layer| {
                acc * layer.rotation_at(t)
            })
    }

    /// Carried body position: the composed orientation applied to the base
    /// offset (carry_radius, 0, 0)
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        self.orientation_at(t) * Vector3::new(self.carry_radius(), 0.0, 0.0)
    }

    /// One revolution of the outermost layer
    pub fn reference_period(&self) -> f64 {
        period_of(self.layers[0].angular_speed)
    }

    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        sample_over_period(self.reference_period(), steps, |t| self.position_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn two_layer_stack() -> (SphereLayer, SphereLayer) {
        let outer = SphereLayer::new(Vector3::y(), 0.8, 2.0).unwrap();
        let inner = SphereLayer::new(Vector3::x(), -0.5, 1.0).unwrap();
        (outer, inner)
    }

    #[test]
    fn test_single_layer_matches_plain_rotation() {
        let layer = SphereLayer::new(Vector3::y(), 0.02, 10.0).unwrap();
        let stack = SphereStack::new(vec![layer]).unwrap();

        // Rotation about +y carries (r,0,0) toward -z
        let quarter = PI / 2.0 / 0.02;
        let p = stack.position_at(quarter);
        assert!(p.x.abs() < 1e-9);
        assert!((p.z + 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-12);
    }

    #[test]
    fn test_layer_order_is_significant() {
        let (outer, inner) = two_layer_stack();

        let forward = SphereStack::new(vec![outer.clone(), inner.clone()]).unwrap();
        let reversed = SphereStack::new(vec![inner, outer]).unwrap();

        // Non-parallel axes: composing in reverse order is a different path
        let mut diverged = false;
        for i in 1..50 {
            let t = i as f64 * 0.7;
            let a = forward.orientation_at(t) * Vector3::x();
            let b = reversed.orientation_at(t) * Vector3::x();
            if (a - b).norm() > 1e-6 {
                diverged = true;
                break;
            }
        }
        assert!(diverged, "reversing layer order must change the path");
    }

    #[test]
    fn test_parallel_axes_commute() {
        let a = SphereLayer::new(Vector3::y(), 0.3, 2.0).unwrap();
        let b = SphereLayer::new(Vector3::y(), -0.7, 2.0).unwrap();

        let forward = SphereStack::new(vec![a.clone(), b.clone()]).unwrap();
        let reversed = SphereStack::new(vec![b, a]).unwrap();

        for i in 0..20 {
            let t = i as f64 * 1.3;
            let p = forward.position_at(t);
            let q = reversed.position_at(t);
            assert!((p - q).norm() < 1e-9);
        }
    }

    #[test]
    fn test_carried_body_keeps_its_distance() {
        let (outer, inner) = two_layer_stack();
        let stack = SphereStack::new(vec![outer, inner]).unwrap();

        for i in 0..100 {
            let p = stack.position_at(i as f64 * 2.9);
            assert!((p.norm() - stack.carry_radius()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_stack_rejected() {
        assert!(matches!(
            SphereStack::new(Vec::new()),
            Err(ModelError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_zero_axis_rejected() {
        assert!(SphereLayer::new(Vector3::zeros(), 0.1, 1.0).is_err());
    }
}
