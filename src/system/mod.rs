//! System orchestration: two tracked hands driving two drones.
//!
//! Contains the top-level `GestureSystem` that runs the per-frame path
//! (adapter -> classifier -> simulator), the producer-side pipeline, and
//! the message types between them.

mod gesture_system;
pub mod messages;
pub mod pipeline;

pub use gesture_system::{FrameReport, GestureSystem, HandReport, drone_slot};
pub use messages::DetectionSet;
pub use pipeline::{FrameSource, GesturePipeline};
