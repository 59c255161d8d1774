//! Hippopede ("horse fetter") retrograde-motion curve
//!
//! Approximates the apparent retrograde loop of a planet seen from Earth by
//! superposing a double-frequency oscillation on a tilted circular path.

use crate::error::{require_finite, require_positive, SimResult};
use crate::orbits::period_of;
use nalgebra::Vector3;
use orrery_core::constants::DEFAULT_OSCILLATION;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Tilted figure-eight orbit
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HippopedeOrbit {
    /// Primary circle radius (scene units)
    pub radius: f64,
    /// Inclination of the orbital plane (radians)
    pub tilt: f64,
    /// Signed angular speed (radians per simulated time unit)
    pub angular_speed: f64,
    /// Amplitude of the double-frequency oscillation term
    pub oscillation: f64,
}

impl HippopedeOrbit {
    /// Create with the default oscillation amplitude
    pub fn new(radius: f64, tilt: f64, angular_speed: f64) -> SimResult<Self> {
        Self::with_oscillation(radius, tilt, angular_speed, DEFAULT_OSCILLATION)
    }

    pub fn with_oscillation(
        radius: f64,
        tilt: f64,
        angular_speed: f64,
        oscillation: f64,
    ) -> SimResult<Self> {
        require_positive("radius", radius)?;
        require_finite("tilt", tilt)?;
        require_finite("angular_speed", angular_speed)?;
        require_finite("oscillation", oscillation)?;
        Ok(Self {
            radius,
            tilt,
            angular_speed,
            oscillation,
        })
    }

    /// Point on the curve at phase angle θ
    ///
    /// Single source of truth for the live position and the sampled path, so
    /// the moving body never drifts off its drawn curve.
    pub fn position_at_angle(&self, theta: f64) -> Vector3<f64> {
        let (sin_t, cos_t) = theta.sin_cos();
        let sin_2t = (2.0 * theta).sin();
        Vector3::new(
            self.radius * cos_t + self.oscillation * sin_2t,
            self.radius * sin_t * self.tilt.sin(),
            self.radius * sin_2t * self.tilt.cos(),
        )
    }

    /// Position at simulated time t
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        self.position_at_angle(self.angular_speed * t)
    }

    /// Period of the curve in simulated time
    pub fn period(&self) -> f64 {
        period_of(self.angular_speed)
    }

    /// Sample the closed curve at `steps` equally spaced phase angles,
    /// independent of time
    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        let n = steps.max(1);
        (0..n)
            .map(|i| self.position_at_angle(i as f64 * TAU / n as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_position_stays_on_sampled_path() {
        let orbit = HippopedeOrbit::new(3.0, 0.41, 0.02).unwrap();
        let steps = 720;
        let path = orbit.sample_path(steps);

        // position_at(t_i) with θ_i = speed * t_i must land on path[i]
        for (i, expected) in path.iter().enumerate() {
            let theta = i as f64 * TAU / steps as f64;
            let t = theta / orbit.angular_speed;
            let live = orbit.position_at(t);
            assert!((live - expected).norm() < 1e-9, "drift at sample {}", i);
        }
    }

    #[test]
    fn test_periodicity() {
        let orbit = HippopedeOrbit::new(3.0, 0.3, 0.02).unwrap();
        let period = orbit.period();

        for i in 0..50 {
            let t = i as f64 * 11.3 - 250.0;
            let a = orbit.position_at(t);
            let b = orbit.position_at(t + period);
            assert!((a - b).norm() < 1e-7);
        }
    }

    #[test]
    fn test_zero_tilt_is_planar() {
        let orbit = HippopedeOrbit::new(3.0, 0.0, 0.02).unwrap();

        for i in 0..100 {
            let p = orbit.position_at(i as f64 * 5.0);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_zero_radius_degenerates_to_oscillation() {
        // radius 0 is rejected by construction; the degenerate curve is
        // still reachable through the angle evaluation
        let orbit = HippopedeOrbit {
            radius: 0.0,
            tilt: 0.3,
            angular_speed: 0.02,
            oscillation: 0.5,
        };

        for i in 0..36 {
            let theta = i as f64 * TAU / 36.0;
            let p = orbit.position_at_angle(theta);
            assert!((p.x - 0.5 * (2.0 * theta).sin()).abs() < 1e-12);
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_rejects_non_finite_tilt() {
        assert!(HippopedeOrbit::new(3.0, f64::NAN, 0.02).is_err());
    }
}
