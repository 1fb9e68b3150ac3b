//! Hand-local geometric predicates.
//!
//! Each predicate derives one anatomical boolean from a [`LandmarkFrame`].
//! They are deliberately small and unit-testable; the classifier combines
//! them in a fixed priority order.

use crate::hand::landmarks::{FINGER_TIPS, PALM_CENTER, PINKY_MCP, THUMB_TIP};
use crate::hand::{Landmark, LandmarkFrame};

/// Whether the hand is fully closed: the mean Euclidean distance from the
/// palm center (middle-finger MCP) to the four non-thumb tips is below the
/// threshold.
pub fn is_fist(frame: &LandmarkFrame, threshold: f64) -> bool {
    let palm = frame.point(PALM_CENTER);
    let mean_dist = FINGER_TIPS
        .iter()
        .map(|&tip| (frame.point(tip) - palm).norm())
        .sum::<f64>()
        / FINGER_TIPS.len() as f64;
    mean_dist < threshold
}

/// Whether a finger tip sits vertically above its base by more than the
/// threshold. Image y grows downward, so "above" means a smaller y.
pub fn is_finger_raised(tip: &Landmark, base: &Landmark, threshold: f64) -> bool {
    tip.y < base.y - threshold
}

/// Symmetric opposite of [`is_finger_raised`]: the tip sits below its base
/// by more than the threshold.
pub fn is_finger_lowered(tip: &Landmark, base: &Landmark, threshold: f64) -> bool {
    tip.y > base.y + threshold
}

/// Whether the thumb is extended. Judged by lateral displacement only,
/// since the thumb's natural resting motion is horizontal in the image.
pub fn is_thumb_extended(tip: &Landmark, base: &Landmark, threshold: f64) -> bool {
    (tip.x - base.x).abs() > threshold
}

/// Whether two finger tips are within touching distance of each other.
pub fn fingers_touching(a: &Landmark, b: &Landmark, threshold: f64) -> bool {
    (a - b).norm() < threshold
}

/// Geometric right/left determination: for a right hand facing the camera
/// the thumb tip lies left of the pinky base. Independent of the
/// detector's handedness label; used to refine thumb-direction rules.
pub fn is_right_hand_geometry(frame: &LandmarkFrame) -> bool {
    frame.point(THUMB_TIP).x < frame.point(PINKY_MCP).x
}
