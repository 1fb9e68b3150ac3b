//! Simulator motion configuration.

use serde::Deserialize;

/// Kinematic parameters of the simulated drones.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Translation per applied command, world units.
    pub speed: f64,
    /// Faster translation used while running scripted maneuvers.
    pub gesture_speed: f64,
    /// Radius of the circle flown in the XZ plane around the home point.
    pub circle_radius: f64,
    /// Phase advance per circle command, radians.
    pub circle_speed: f64,
    /// Axis-aligned flight volume, component-wise minimum corner.
    pub bounds_min: [f64; 3],
    /// Axis-aligned flight volume, component-wise maximum corner.
    pub bounds_max: [f64; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            speed: 0.1,
            gesture_speed: 0.15,
            circle_radius: 1.0,
            circle_speed: 0.05,
            bounds_min: [-5.0, -3.0, -15.0],
            bounds_max: [5.0, 3.0, -5.0],
        }
    }
}
