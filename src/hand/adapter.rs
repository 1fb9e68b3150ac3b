//! Adapter from raw detector output to the canonical [`LandmarkFrame`].
//!
//! The detector itself (hand-pose estimation over camera images) is an
//! external capability; this module only normalizes its per-hand output
//! and enforces the 21-landmark input contract.

use anyhow::{Result, bail};
use nalgebra::Vector3;
use serde::Deserialize;

use super::frame::{Handedness, LandmarkFrame};
use super::landmarks::NUM_LANDMARKS;

/// One hand as reported by the external detector: an ordered list of
/// 3D points plus the camera-image handedness label.
#[derive(Debug, Clone)]
pub struct RawHandDetection {
    pub landmarks: Vec<[f64; 3]>,
    pub handedness: Option<Handedness>,
}

/// Knobs of the external detector, passed explicitly at adapter
/// construction rather than living in global state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Maximum number of hands the detector tracks per image.
    pub max_hands: usize,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_hands: 2,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}

/// Normalizes raw detections into [`LandmarkFrame`]s.
pub struct LandmarkAdapter {
    config: DetectorConfig,
}

impl LandmarkAdapter {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// The detector contract this adapter was constructed with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Normalize one raw detection into the canonical data model.
    ///
    /// A landmark count other than 21, or a missing handedness label, is a
    /// detector contract violation and fails this hand's frame. The
    /// transform is pure; a malformed detection for one hand never affects
    /// classification of the other hand in the same image.
    pub fn normalize(&self, raw: &RawHandDetection) -> Result<(LandmarkFrame, Handedness)> {
        if raw.landmarks.len() != NUM_LANDMARKS {
            bail!(
                "detection has {} landmarks, expected {}",
                raw.landmarks.len(),
                NUM_LANDMARKS
            );
        }
        let Some(handedness) = raw.handedness else {
            bail!("detection is missing a handedness label");
        };

        let mut points = [Vector3::zeros(); NUM_LANDMARKS];
        for (point, raw) in points.iter_mut().zip(&raw.landmarks) {
            *point = Vector3::new(raw[0], raw[1], raw[2]);
        }

        Ok((LandmarkFrame::from_points(points), handedness))
    }
}

impl Default for LandmarkAdapter {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valid_raw() -> RawHandDetection {
        RawHandDetection {
            landmarks: (0..NUM_LANDMARKS)
                .map(|i| [i as f64 * 0.01, 0.5, -0.02])
                .collect(),
            handedness: Some(Handedness::CameraRight),
        }
    }

    #[test]
    fn test_normalize_valid_detection() {
        let adapter = LandmarkAdapter::default();
        let (frame, handedness) = adapter.normalize(&valid_raw()).unwrap();

        assert_eq!(handedness, Handedness::CameraRight);
        assert_relative_eq!(frame.point(4).x, 0.04, epsilon = 1e-12);
        assert_relative_eq!(frame.point(20).x, 0.20, epsilon = 1e-12);
        assert_relative_eq!(frame.point(0).z, -0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_wrong_landmark_count_is_rejected() {
        let adapter = LandmarkAdapter::default();
        let mut raw = valid_raw();
        raw.landmarks.truncate(19);

        assert!(adapter.normalize(&raw).is_err());
    }

    #[test]
    fn test_missing_handedness_is_rejected() {
        let adapter = LandmarkAdapter::default();
        let mut raw = valid_raw();
        raw.handedness = None;

        assert!(adapter.normalize(&raw).is_err());
    }
}
