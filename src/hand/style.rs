//! Per-hand visual style for downstream overlay rendering.

use super::frame::Handedness;

/// Plain data describing how a hand's landmarks and skeleton should be
/// drawn. Constructed once per classification result; the renderer never
/// needs to branch on handedness labels itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    /// RGB color.
    pub color: [u8; 3],
    pub thickness: f32,
    pub point_radius: f32,
}

impl HandStyle {
    /// Style for the given camera-image handedness.
    ///
    /// `CameraRight` (the user's anatomical left hand) drives the red
    /// drone, `CameraLeft` the blue one, matching the drone slot mapping.
    pub fn for_handedness(handedness: Handedness) -> Self {
        let color = match handedness {
            Handedness::CameraRight => [255, 0, 0],
            Handedness::CameraLeft => [0, 0, 255],
        };
        Self {
            color,
            thickness: 2.0,
            point_radius: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_follow_drone_colors() {
        let red = HandStyle::for_handedness(Handedness::CameraRight);
        let blue = HandStyle::for_handedness(Handedness::CameraLeft);

        assert_eq!(red.color, [255, 0, 0]);
        assert_eq!(blue.color, [0, 0, 255]);
    }
}
