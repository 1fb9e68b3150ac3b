//! Drone target kinematics: consumes per-hand gestures and integrates
//! target positions over time.
//!
//! This is the actuation side of the output boundary. Rendering is not
//! done here; the simulator only owns the mutable state the gestures act
//! on, including the per-drone circle phase accumulator that the
//! stateless classifier never touches.

pub mod config;

pub use config::SimConfig;

use nalgebra::Vector3;

use crate::classifier::Gesture;

/// Number of independently actuated targets (one per tracked hand).
pub const NUM_DRONES: usize = 2;

/// Home x offsets: slot 0 (red) left of center, slot 1 (blue) right.
const HOME_X: [f64; NUM_DRONES] = [-2.0, 2.0];
const HOME_Y: f64 = 0.0;
const HOME_Z: f64 = -10.0;

/// Scripted acknowledgment maneuvers, run on both drones at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// Nod up and down three times.
    NodYes,
    /// Shake left and right three times.
    ShakeNo,
}

impl Maneuver {
    /// Command sequence applied to both drones, at gesture speed.
    ///
    /// Each repetition moves out, sweeps twice as far the other way, then
    /// recenters, so the drone ends each cycle near where it started.
    fn steps(self) -> Vec<Gesture> {
        let (out, back) = match self {
            Maneuver::NodYes => (Gesture::Up, Gesture::Down),
            Maneuver::ShakeNo => (Gesture::Left, Gesture::Right),
        };
        let mut steps = Vec::new();
        for _ in 0..3 {
            steps.extend(std::iter::repeat(out).take(3));
            steps.extend(std::iter::repeat(back).take(6));
            steps.extend(std::iter::repeat(out).take(3));
        }
        steps
    }
}

/// Kinematic state of one drone.
#[derive(Debug, Clone)]
pub struct DroneState {
    /// World position.
    pub position: Vector3<f64>,
    /// Pitch/yaw/roll in degrees, for a downstream renderer.
    pub rotation: Vector3<f64>,
    /// RGB display color.
    pub color: [f32; 3],
    /// Accumulated circle phase, radians. Owned here, not by the
    /// classifier; advances once per applied circle command.
    circle_phase: f64,
    home: Vector3<f64>,
}

impl DroneState {
    fn new(home: Vector3<f64>, color: [f32; 3]) -> Self {
        Self {
            position: home,
            rotation: Vector3::zeros(),
            color,
            circle_phase: 0.0,
            home,
        }
    }

    pub fn circle_phase(&self) -> f64 {
        self.circle_phase
    }
}

/// Two-drone simulator consuming one command pair per processed frame.
pub struct DroneSimulator {
    config: SimConfig,
    drones: [DroneState; NUM_DRONES],
    /// Current translation step; temporarily raised during maneuvers.
    speed: f64,
}

impl DroneSimulator {
    pub fn new(config: SimConfig) -> Self {
        let speed = config.speed;
        Self {
            config,
            drones: [
                DroneState::new(
                    Vector3::new(HOME_X[0], HOME_Y, HOME_Z),
                    [1.0, 0.0, 0.0], // red
                ),
                DroneState::new(
                    Vector3::new(HOME_X[1], HOME_Y, HOME_Z),
                    [0.0, 0.0, 1.0], // blue
                ),
            ],
            speed,
        }
    }

    pub fn drones(&self) -> &[DroneState; NUM_DRONES] {
        &self.drones
    }

    pub fn drone(&self, slot: usize) -> &DroneState {
        &self.drones[slot]
    }

    /// Apply one command per drone slot. `None` leaves that drone
    /// untouched this frame.
    pub fn apply(&mut self, commands: [Option<Gesture>; NUM_DRONES]) {
        for (slot, command) in commands.into_iter().enumerate() {
            let Some(command) = command else { continue };
            self.apply_one(slot, command);
        }
    }

    fn apply_one(&mut self, slot: usize, command: Gesture) {
        let speed = self.speed;
        let drone = &mut self.drones[slot];

        match command {
            Gesture::Circle => {
                drone.circle_phase += self.config.circle_speed;
                drone.position.x =
                    drone.home.x + self.config.circle_radius * drone.circle_phase.cos();
                drone.position.z =
                    drone.home.z + self.config.circle_radius * drone.circle_phase.sin();
                // Yaw follows the phase for visual effect.
                drone.rotation.y = drone.circle_phase.to_degrees();
            }
            other => {
                match other {
                    Gesture::Up => drone.position.y += speed,
                    Gesture::Down => drone.position.y -= speed,
                    Gesture::Left => drone.position.x -= speed,
                    Gesture::Right => drone.position.x += speed,
                    Gesture::Forward => drone.position.z += speed,
                    Gesture::Backward => drone.position.z -= speed,
                    // Stop holds position.
                    Gesture::Stop => {}
                    Gesture::Circle => unreachable!(),
                }
                drone.rotation = Vector3::zeros();
            }
        }

        // Keep the drone inside the flight volume.
        for axis in 0..3 {
            drone.position[axis] = drone.position[axis]
                .clamp(self.config.bounds_min[axis], self.config.bounds_max[axis]);
        }
    }

    /// Run a scripted maneuver on both drones at gesture speed, restoring
    /// the normal speed afterwards.
    pub fn run_maneuver(&mut self, maneuver: Maneuver) {
        let original_speed = self.speed;
        self.speed = self.config.gesture_speed;
        for step in maneuver.steps() {
            self.apply([Some(step), Some(step)]);
        }
        self.speed = original_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_motion_axes() {
        let mut sim = DroneSimulator::new(SimConfig::default());

        sim.apply([Some(Gesture::Up), Some(Gesture::Left)]);
        assert_relative_eq!(sim.drone(0).position.y, 0.1, epsilon = 1e-12);
        assert_relative_eq!(sim.drone(1).position.x, 1.9, epsilon = 1e-12);

        sim.apply([Some(Gesture::Forward), Some(Gesture::Backward)]);
        assert_relative_eq!(sim.drone(0).position.z, -9.9, epsilon = 1e-12);
        assert_relative_eq!(sim.drone(1).position.z, -10.1, epsilon = 1e-12);
    }

    #[test]
    fn test_none_and_stop_hold_position() {
        let mut sim = DroneSimulator::new(SimConfig::default());
        let home0 = sim.drone(0).position;
        let home1 = sim.drone(1).position;

        sim.apply([None, Some(Gesture::Stop)]);
        assert_relative_eq!(sim.drone(0).position, home0, epsilon = 1e-12);
        assert_relative_eq!(sim.drone(1).position, home1, epsilon = 1e-12);
    }

    #[test]
    fn test_positions_are_clamped_to_bounds() {
        let mut sim = DroneSimulator::new(SimConfig::default());

        // y bound is +3.0; 40 steps of 0.1 would reach 4.0 unclamped.
        for _ in 0..40 {
            sim.apply([Some(Gesture::Up), None]);
        }
        assert_relative_eq!(sim.drone(0).position.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_accumulates_phase_and_orbits_home() {
        let mut sim = DroneSimulator::new(SimConfig::default());

        for _ in 0..10 {
            sim.apply([Some(Gesture::Circle), None]);
        }
        let drone = sim.drone(0);
        assert_relative_eq!(drone.circle_phase(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(drone.position.x, -2.0 + 0.5f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(drone.position.z, -10.0 + 0.5f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(drone.rotation.y, 0.5f64.to_degrees(), epsilon = 1e-12);

        // Phase persists across interleaved commands.
        sim.apply([Some(Gesture::Up), None]);
        sim.apply([Some(Gesture::Circle), None]);
        assert_relative_eq!(sim.drone(0).circle_phase(), 0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_non_circle_command_resets_rotation() {
        let mut sim = DroneSimulator::new(SimConfig::default());

        sim.apply([Some(Gesture::Circle), None]);
        assert!(sim.drone(0).rotation.y != 0.0);

        sim.apply([Some(Gesture::Up), None]);
        assert_relative_eq!(sim.drone(0).rotation, Vector3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_maneuver_restores_speed_and_recenters() {
        let mut sim = DroneSimulator::new(SimConfig::default());

        sim.run_maneuver(Maneuver::NodYes);
        // Each cycle is 3 up, 6 down, 3 up: net zero at gesture speed.
        assert_relative_eq!(sim.drone(0).position.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(sim.drone(1).position.y, 0.0, epsilon = 1e-9);

        // Speed restored: a normal command moves by the base step again.
        sim.apply([Some(Gesture::Up), None]);
        assert_relative_eq!(sim.drone(0).position.y, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_shake_moves_laterally() {
        let mut sim = DroneSimulator::new(SimConfig::default());
        let x_before = sim.drone(0).position.x;

        sim.run_maneuver(Maneuver::ShakeNo);
        assert_relative_eq!(sim.drone(0).position.x, x_before, epsilon = 1e-9);
    }
}
