//! Threshold configuration for the gesture classifier.

use serde::Deserialize;

/// Geometric thresholds of the classification predicates.
///
/// All values are distances in the detector's normalized coordinate frame
/// (image width/height mapped to `[0, 1]`). Every comparison against a
/// threshold is a strict inequality.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Mean tip-to-palm distance below which the hand counts as a fist.
    pub fist_threshold: f64,
    /// Vertical margin a tip must clear above/below its base to count as
    /// raised/lowered.
    pub raised_threshold: f64,
    /// Lateral displacement of the thumb tip from its base to count as
    /// extended.
    pub thumb_threshold: f64,
    /// Tip-to-tip distance below which two fingers count as touching.
    /// The default is the pinch-tolerant value, loose enough to absorb
    /// depth noise on the thumb-index pinch.
    pub touch_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fist_threshold: 0.10,
            raised_threshold: 0.10,
            thumb_threshold: 0.10,
            touch_threshold: 0.08,
        }
    }
}
