//! Gesture classification over one hand's landmark frame.
//!
//! The classifier derives hand-local anatomical booleans from the 21
//! landmarks and evaluates a fixed, priority-ordered rule list; the first
//! matching rule wins. Several rules can be geometrically true at once,
//! so the order is the tie-break contract:
//! - fist (full closure) dominates all partial-extension rules
//! - thumb+index / thumb+pinky combinations come before single-finger
//!   rules, so a subset match cannot fire early
//! - the thumb-index pinch resolves last, since touching tips can
//!   coincide with other poses

pub mod config;
pub mod predicates;

pub use config::ClassifierConfig;

use crate::hand::LandmarkFrame;
use crate::hand::landmarks::{
    INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP, PINKY_TIP, THUMB_MCP, THUMB_TIP,
};
use predicates::{
    fingers_touching, is_finger_lowered, is_finger_raised, is_fist, is_right_hand_geometry,
    is_thumb_extended,
};

/// One discrete command symbol recognized from a hand pose.
///
/// Absence of a recognized gesture is `Option::None`, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Stop,
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
    Circle,
}

/// Deterministic, stateless gesture classifier.
///
/// `classify` is a pure function of the frame: no hidden state, no side
/// effects, safe to call concurrently for independent hands.
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one hand's frame into a gesture, or `None` when no rule
    /// matches. Rules are evaluated in strict priority order; the first
    /// match returns.
    pub fn classify(&self, frame: &LandmarkFrame) -> Option<Gesture> {
        let cfg = &self.config;

        let thumb_tip = frame.point(THUMB_TIP);
        let thumb_base = frame.point(THUMB_MCP);
        let index_tip = frame.point(INDEX_TIP);
        let index_base = frame.point(INDEX_MCP);
        let middle_tip = frame.point(MIDDLE_TIP);
        let middle_base = frame.point(MIDDLE_MCP);
        let pinky_tip = frame.point(PINKY_TIP);
        let pinky_base = frame.point(PINKY_MCP);

        let thumb_extended = is_thumb_extended(&thumb_tip, &thumb_base, cfg.thumb_threshold);
        let index_raised = is_finger_raised(&index_tip, &index_base, cfg.raised_threshold);
        let middle_raised = is_finger_raised(&middle_tip, &middle_base, cfg.raised_threshold);
        let pinky_raised = is_finger_raised(&pinky_tip, &pinky_base, cfg.raised_threshold);
        let pinky_lowered = is_finger_lowered(&pinky_tip, &pinky_base, cfg.raised_threshold);

        // 1. Full closure: a fist satisfies the none-raised conditions of
        // every later rule, so it must be checked first.
        if is_fist(frame, cfg.fist_threshold) {
            return Some(Gesture::Stop);
        }

        // 2. Thumb and index extended, middle and pinky closed.
        if thumb_extended && index_raised && !middle_raised && !pinky_raised {
            return Some(Gesture::Forward);
        }

        // 3. Thumb extended with the pinky clearly away from its base in
        // either direction. Must precede the thumb-only rule, which would
        // fire on the pinky-lowered subset.
        if thumb_extended && (pinky_raised || pinky_lowered) && !index_raised && !middle_raised {
            return Some(Gesture::Circle);
        }

        // 4. Thumb-only extension steers by thumb direction alone. The
        // mapping is identical for both hands; only the thumb's pointing
        // direction matters, not which hand performs it.
        if thumb_extended && !index_raised && !middle_raised && !pinky_raised {
            let thumb_points_left = thumb_tip.x < thumb_base.x;
            return Some(if thumb_points_left {
                Gesture::Right
            } else {
                Gesture::Left
            });
        }

        // 5. Index only.
        if index_raised && !middle_raised && !pinky_raised && !thumb_extended {
            return Some(Gesture::Up);
        }

        // 6. Index and middle together.
        if index_raised && middle_raised && !pinky_raised && !thumb_extended {
            return Some(Gesture::Down);
        }

        // 7. Pinky only: the lateral meaning flips with geometric
        // handedness, refined from the landmarks rather than trusting the
        // detector label.
        if pinky_raised && !index_raised && !middle_raised && !thumb_extended {
            return Some(if is_right_hand_geometry(frame) {
                Gesture::Left
            } else {
                Gesture::Right
            });
        }

        // 8. Thumb-index pinch, only once no higher-priority shape matched.
        if fingers_touching(&thumb_tip, &index_tip, cfg.touch_threshold)
            && !middle_raised
            && !pinky_raised
        {
            return Some(Gesture::Backward);
        }

        None
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
