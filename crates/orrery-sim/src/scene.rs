//! Scene state management
//!
//! A scene owns the simulation clock and the set of tracked bodies. All
//! position recomputation for a frame happens synchronously in `snapshot`;
//! the clock is the only mutable state.

use crate::body::CelestialBody;
use crate::clock::SimulationClock;
use crate::error::{ModelError, SimResult};
use orrery_core::coordinates::CartesianPosition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body state captured in a snapshot
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BodyState {
    pub position: CartesianPosition,
    /// Marker size for the rendering collaborator
    pub body_radius: f64,
}

/// All body states at a single simulated time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: f64,
    pub states: HashMap<String, BodyState>,
}

/// A set of named bodies sharing one clock
#[derive(Clone, Debug, Default)]
pub struct Scene {
    clock: SimulationClock,
    bodies: Vec<CelestialBody>,
}

impl Scene {
    /// Empty scene with a default clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: SimulationClock) -> Self {
        Self {
            clock,
            bodies: Vec::new(),
        }
    }

    /// Add a body; names are unique within a scene
    pub fn add_body(&mut self, body: CelestialBody) -> SimResult<()> {
        if self.bodies.iter().any(|b| b.name == body.name) {
            return Err(ModelError::DuplicateBody(body.name));
        }
        self.bodies.push(body);
        Ok(())
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut SimulationClock {
        &mut self.clock
    }

    /// Set absolute simulated time
    pub fn set_time(&mut self, time: f64) {
        self.clock.set_time(time);
    }

    /// Advance the clock by one frame delta; returns the new simulated time
    pub fn advance(&mut self, frame_delta: f64) -> f64 {
        self.clock.tick(frame_delta)
    }

    /// Rewind the clock, as when a model is switched or reloaded
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Position of a single body at the current time
    pub fn body_position(&self, name: &str) -> Option<CartesianPosition> {
        let t = self.clock.current();
        self.bodies
            .iter()
            .find(|b| b.name == name)
            .map(|b| CartesianPosition::from_vector(b.position_at(t)))
    }

    /// All body states at the current time
    pub fn snapshot(&self) -> SceneSnapshot {
        let t = self.clock.current();
        let mut states = HashMap::new();

        for body in &self.bodies {
            states.insert(
                body.name.clone(),
                BodyState {
                    position: CartesianPosition::from_vector(body.position_at(t)),
                    body_radius: body.body_radius,
                },
            );
        }

        SceneSnapshot { time: t, states }
    }
}
