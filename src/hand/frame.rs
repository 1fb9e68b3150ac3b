//! Canonical per-hand data model consumed by the gesture classifier.

use nalgebra::Vector3;

use super::landmarks::NUM_LANDMARKS;

/// One 3D keypoint of the tracked hand skeleton.
///
/// Coordinates live in the detector's normalized image-relative frame:
/// x and y in `[0, 1]` relative to image width/height (y grows downward),
/// z is relative depth with negative values closer to the camera.
pub type Landmark = Vector3<f64>;

/// Exactly 21 landmarks of one hand, indexed by the fixed anatomical
/// numbering in [`super::landmarks`].
///
/// A frame is produced fresh for every processed image and is immutable
/// once constructed; it has no identity beyond one classification call.
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    points: [Landmark; NUM_LANDMARKS],
}

impl LandmarkFrame {
    pub fn from_points(points: [Landmark; NUM_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Landmark at the given anatomical index.
    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn points(&self) -> &[Landmark; NUM_LANDMARKS] {
        &self.points
    }
}

/// The raw hand label reported by the detector for the (mirrored,
/// front-facing) camera image.
///
/// Because the camera presents a mirror image, `CameraRight` corresponds
/// to the user's anatomical LEFT hand and vice versa. This inversion is a
/// fixed convention of the upstream detector and must not be "corrected"
/// anywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    /// Labeled "Left" in the camera image (user's anatomical right hand).
    CameraLeft,
    /// Labeled "Right" in the camera image (user's anatomical left hand).
    CameraRight,
}
