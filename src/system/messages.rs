//! Message types sent from the frame producer to the processing loop.

use crate::hand::RawHandDetection;

/// All hand detections reported for one processed image frame.
#[derive(Debug, Clone)]
pub struct DetectionSet {
    /// Monotonic index of the source image frame.
    pub frame_index: usize,
    /// Zero, one, or two hands as reported by the detector.
    pub hands: Vec<RawHandDetection>,
}
