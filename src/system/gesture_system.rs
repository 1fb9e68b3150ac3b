//! Top-level per-frame orchestration: normalize each detected hand,
//! classify it, and route the command pair to the drones.

use tracing::warn;

use crate::classifier::{Gesture, GestureClassifier};
use crate::hand::{Handedness, HandStyle, LandmarkAdapter, RawHandDetection};
use crate::io::config::PilotConfig;
use crate::sim::{DroneSimulator, Maneuver, NUM_DRONES};

/// Drone slot driven by a hand with the given camera-image label.
///
/// The camera mirrors the user: the hand labeled `CameraRight` is the
/// user's anatomical LEFT hand and drives slot 0 (red); `CameraLeft`
/// drives slot 1 (blue). This mapping follows the documented detector
/// convention and must not be "corrected".
pub fn drone_slot(handedness: Handedness) -> usize {
    match handedness {
        Handedness::CameraRight => 0,
        Handedness::CameraLeft => 1,
    }
}

/// What happened to one successfully processed hand.
#[derive(Debug, Clone)]
pub struct HandReport {
    pub handedness: Handedness,
    pub gesture: Option<Gesture>,
    pub style: HandStyle,
}

/// Summary of one processed image frame.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Command routed to each drone slot this frame.
    pub commands: [Option<Gesture>; NUM_DRONES],
    /// Per-hand outcomes, in detection order.
    pub hands: Vec<HandReport>,
    /// Detections rejected for violating the input-shape contract.
    pub rejected: usize,
}

/// Owns the adapter, classifier, and simulator, and runs the full
/// per-frame path: detections in, drone motion out.
pub struct GestureSystem {
    adapter: LandmarkAdapter,
    classifier: GestureClassifier,
    simulator: DroneSimulator,
}

impl GestureSystem {
    pub fn new(config: PilotConfig) -> Self {
        Self {
            adapter: LandmarkAdapter::new(config.detector),
            classifier: GestureClassifier::new(config.classifier),
            simulator: DroneSimulator::new(config.sim),
        }
    }

    /// Process all hand detections of one image frame.
    ///
    /// Hands are handled independently: a malformed detection is logged
    /// and counted, and never disturbs the sibling hand's classification.
    /// Classification itself never fails; an unrecognized pose is simply
    /// no command for that drone this frame.
    pub fn process_frame(&mut self, detections: &[RawHandDetection]) -> FrameReport {
        let mut commands = [None; NUM_DRONES];
        let mut hands = Vec::with_capacity(detections.len());
        let mut rejected = 0;

        for raw in detections {
            match self.adapter.normalize(raw) {
                Ok((frame, handedness)) => {
                    let gesture = self.classifier.classify(&frame);
                    commands[drone_slot(handedness)] = gesture;
                    hands.push(HandReport {
                        handedness,
                        gesture,
                        style: HandStyle::for_handedness(handedness),
                    });
                }
                Err(e) => {
                    warn!("Rejecting malformed hand detection: {e}");
                    rejected += 1;
                }
            }
        }

        self.simulator.apply(commands);

        FrameReport {
            commands,
            hands,
            rejected,
        }
    }

    /// Run a scripted acknowledgment maneuver on both drones.
    pub fn run_maneuver(&mut self, maneuver: Maneuver) {
        self.simulator.run_maneuver(maneuver);
    }

    pub fn simulator(&self) -> &DroneSimulator {
        &self.simulator
    }
}
