//! Closed-form circular orbit family: plain, eccentric, deferent+epicycle,
//! and the Tusi-couple gap

use crate::error::{require_finite, require_positive, ModelError, SimResult};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Period of one revolution at the given angular speed
/// Falls back to a full turn when the speed is zero (static configurations)
pub(crate) fn period_of(angular_speed: f64) -> f64 {
    if angular_speed == 0.0 {
        TAU
    } else {
        TAU / angular_speed.abs()
    }
}

/// Evaluate `position` at `steps` equal fractions of `period`
pub(crate) fn sample_over_period<F>(period: f64, steps: usize, position: F) -> Vec<Vector3<f64>>
where
    F: Fn(f64) -> Vector3<f64>,
{
    let n = steps.max(1);
    (0..n)
        .map(|i| position(i as f64 * period / n as f64))
        .collect()
}

/// Uniform circular orbit in the ecliptic plane, centered on the observer
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CircularOrbit {
    /// Orbit radius (scene units)
    pub radius: f64,
    /// Signed angular speed (radians per simulated time unit)
    pub angular_speed: f64,
}

impl CircularOrbit {
    pub fn new(radius: f64, angular_speed: f64) -> SimResult<Self> {
        require_positive("radius", radius)?;
        require_finite("angular_speed", angular_speed)?;
        Ok(Self { radius, angular_speed })
    }

    /// Orbital period (simulated time units)
    pub fn period(&self) -> f64 {
        period_of(self.angular_speed)
    }

    /// Position at simulated time t; at t=0 the body sits at (radius, 0, 0)
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        let theta = self.angular_speed * t;
        Vector3::new(self.radius * theta.cos(), 0.0, self.radius * theta.sin())
    }

    /// Sample one full revolution for static path rendering
    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        sample_over_period(self.period(), steps, |t| self.position_at(t))
    }
}

/// Uniform circular orbit whose center is offset from the observer
///
/// Seen from the origin the angular rate appears non-uniform even though the
/// motion on the offset circle is uniform. That apparent non-uniformity is
/// the point of the model; it is not corrected here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EccentricOrbit {
    /// Orbit radius (scene units)
    pub radius: f64,
    /// Fixed offset of the orbit center from the observer
    pub center: Vector3<f64>,
    /// Signed angular speed (radians per simulated time unit)
    pub angular_speed: f64,
}

impl EccentricOrbit {
    pub fn new(radius: f64, center: Vector3<f64>, angular_speed: f64) -> SimResult<Self> {
        require_positive("radius", radius)?;
        require_finite("center.x", center.x)?;
        require_finite("center.y", center.y)?;
        require_finite("center.z", center.z)?;
        require_finite("angular_speed", angular_speed)?;
        Ok(Self { radius, center, angular_speed })
    }

    /// Orbital period (simulated time units)
    pub fn period(&self) -> f64 {
        period_of(self.angular_speed)
    }

    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        let theta = self.angular_speed * t;
        Vector3::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y,
            self.center.z + self.radius * theta.sin(),
        )
    }

    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        sample_over_period(self.period(), steps, |t| self.position_at(t))
    }
}

/// Two-level circular composition: a body on a small circle (epicycle) whose
/// center travels along a large circle (deferent)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DeferentEpicycle {
    /// Deferent radius (scene units)
    pub deferent_radius: f64,
    /// Signed angular speed of the epicycle center on the deferent
    pub deferent_speed: f64,
    /// Epicycle radius (scene units)
    pub epicycle_radius: f64,
    /// Signed angular speed of the body on the epicycle
    pub epicycle_speed: f64,
}

impl DeferentEpicycle {
    pub fn new(
        deferent_radius: f64,
        deferent_speed: f64,
        epicycle_radius: f64,
        epicycle_speed: f64,
    ) -> SimResult<Self> {
        require_positive("deferent_radius", deferent_radius)?;
        require_finite("deferent_speed", deferent_speed)?;
        require_positive("epicycle_radius", epicycle_radius)?;
        require_finite("epicycle_speed", epicycle_speed)?;
        Ok(Self {
            deferent_radius,
            deferent_speed,
            epicycle_radius,
            epicycle_speed,
        })
    }

    /// Center of the epicycle at simulated time t; the renderer draws the
    /// carrying circle through these points
    pub fn deferent_center_at(&self, t: f64) -> Vector3<f64> {
        let theta = self.deferent_speed * t;
        Vector3::new(
            self.deferent_radius * theta.cos(),
            0.0,
            self.deferent_radius * theta.sin(),
        )
    }

    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        let phi = self.epicycle_speed * t;
        self.deferent_center_at(t)
            + Vector3::new(
                self.epicycle_radius * phi.cos(),
                0.0,
                self.epicycle_radius * phi.sin(),
            )
    }

    /// One deferent revolution, or one epicycle revolution for a static
    /// deferent
    pub fn reference_period(&self) -> f64 {
        if self.deferent_speed != 0.0 {
            period_of(self.deferent_speed)
        } else {
            period_of(self.epicycle_speed)
        }
    }

    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        sample_over_period(self.reference_period(), steps, |t| self.position_at(t))
    }
}

/// Tusi couple, restricted to the classic 2:1 radius ratio
///
/// A point on a circle rolling inside a circle of twice its radius traces a
/// straight diameter; only that degenerate straight-line contract is
/// implemented. Other radius ratios are an explicit gap, not invented
/// behavior.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TusiCouple {
    /// Radius of the outer circle (scene units)
    pub outer_radius: f64,
    /// Signed angular speed of the rolling motion
    pub angular_speed: f64,
}

impl TusiCouple {
    pub fn new(outer_radius: f64, inner_radius: f64, angular_speed: f64) -> SimResult<Self> {
        require_positive("outer_radius", outer_radius)?;
        require_positive("inner_radius", inner_radius)?;
        require_finite("angular_speed", angular_speed)?;

        if (inner_radius - outer_radius / 2.0).abs() > 1e-9 * outer_radius {
            return Err(ModelError::NotImplemented(
                "Tusi couple outside the 2:1 radius ratio",
            ));
        }

        Ok(Self { outer_radius, angular_speed })
    }

    /// Period of one full back-and-forth sweep (simulated time units)
    pub fn period(&self) -> f64 {
        period_of(self.angular_speed)
    }

    /// The traced point oscillates along the x axis between ±outer_radius
    pub fn position_at(&self, t: f64) -> Vector3<f64> {
        let theta = self.angular_speed * t;
        Vector3::new(self.outer_radius * theta.cos(), 0.0, 0.0)
    }

    pub fn sample_path(&self, steps: usize) -> Vec<Vector3<f64>> {
        sample_over_period(self.period(), steps, |t| self.position_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_circular_stays_on_circle() {
        for &radius in &[0.5, 10.0, 123.4] {
            for &speed in &[0.02, -1.3] {
                let orbit = CircularOrbit::new(radius, speed).unwrap();
                for i in 0..100 {
                    let t = i as f64 * 7.3 - 300.0;
                    let p = orbit.position_at(t);
                    assert!((p.x * p.x + p.z * p.z - radius * radius).abs() < 1e-9 * radius * radius);
                    assert_eq!(p.y, 0.0);
                }
            }
        }
    }

    #[test]
    fn test_circular_half_period() {
        // radius 10, speed 0.02: t=0 at (10,0,0), half a period later at (-10,0,0)
        let orbit = CircularOrbit::new(10.0, 0.02).unwrap();

        let start = orbit.position_at(0.0);
        assert_eq!(start, Vector3::new(10.0, 0.0, 0.0));

        let half = orbit.position_at(PI / 0.02);
        assert!((half.x + 10.0).abs() < 1e-9);
        assert!(half.z.abs() < 1e-7);
    }

    #[test]
    fn test_eccentric_holds_center_height() {
        let center = Vector3::new(5.0, 2.0, -1.0);
        let orbit = EccentricOrbit::new(20.0, center, 0.01).unwrap();

        for i in 0..50 {
            let p = orbit.position_at(i as f64 * 13.7);
            assert_eq!(p.y, 2.0);
            let dx = p.x - center.x;
            let dz = p.z - center.z;
            assert!((dx * dx + dz * dz - 400.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_epicycle_rides_the_deferent() {
        let model = DeferentEpicycle::new(20.0, 0.02, 5.0, 0.14).unwrap();

        for i in 0..100 {
            let t = i as f64 * 3.1;
            let center = model.deferent_center_at(t);
            let offset = model.position_at(t) - center;
            assert!((offset.norm() - 5.0).abs() < 1e-9);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn test_tusi_traces_a_diameter() {
        let couple = TusiCouple::new(10.0, 5.0, 0.02).unwrap();
        assert_eq!(couple.position_at(0.0), Vector3::new(10.0, 0.0, 0.0));

        for i in 0..200 {
            let p = couple.position_at(i as f64 * 1.7);
            assert!(p.x >= -10.0 - 1e-12 && p.x <= 10.0 + 1e-12);
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_tusi_rejects_other_ratios() {
        let result = TusiCouple::new(10.0, 4.0, 0.02);
        assert!(matches!(result, Err(ModelError::NotImplemented(_))));
    }

    #[test]
    fn test_zero_speed_is_static() {
        let orbit = CircularOrbit::new(3.0, 0.0).unwrap();
        assert_eq!(orbit.position_at(1000.0), Vector3::new(3.0, 0.0, 0.0));

        let path = orbit.sample_path(8);
        assert_eq!(path.len(), 8);
        for p in path {
            assert_eq!(p, Vector3::new(3.0, 0.0, 0.0));
        }
    }
}
