use std::f64::consts::PI;

/// Default amplitude of the hippopede double-frequency oscillation term
pub const DEFAULT_OSCILLATION: f64 = 0.5;

/// Default clock speed factor used by the sphere demos
pub const DEFAULT_SPEED_FACTOR: f64 = 0.005;

/// Obliquity of the ecliptic used by the historical presets (radians)
pub const OBLIQUITY: f64 = 23.5 * PI / 180.0;
