//! Recorded detection sessions for offline replay.
//!
//! A session is a CSV file with one row per detected hand:
//!
//! ```text
//! frame_index, handedness, x0, y0, z0, x1, y1, z1, ..., x20, y20, z20
//! ```
//!
//! `handedness` is the detector's camera-image label (`Left` / `Right`).
//! Consecutive rows with the same frame index belong to the same image
//! frame. The loader keeps whatever landmark count a row carries; the
//! adapter enforces the 21-point contract at classification time, so
//! malformed recorded hands exercise the same rejection path as live ones.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::warn;

use crate::hand::{Handedness, RawHandDetection};
use crate::system::messages::DetectionSet;
use crate::system::pipeline::FrameSource;

/// A fully loaded recorded session, grouped per image frame.
#[derive(Debug)]
pub struct RecordedSession {
    frames: Vec<DetectionSet>,
}

impl RecordedSession {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open session {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(reader);

        let mut frames: Vec<DetectionSet> = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            if rec.len() < 2 {
                continue;
            }
            let frame_index: usize = rec[0].trim().parse()?;
            let handedness = match rec[1].trim() {
                "Right" => Some(Handedness::CameraRight),
                "Left" => Some(Handedness::CameraLeft),
                other => {
                    warn!("Unknown handedness label {other:?} in frame {frame_index}");
                    None
                }
            };

            let mut landmarks = Vec::with_capacity((rec.len() - 2) / 3);
            let mut coords = rec.iter().skip(2);
            while let (Some(x), Some(y), Some(z)) = (coords.next(), coords.next(), coords.next()) {
                landmarks.push([
                    x.trim().parse::<f64>()?,
                    y.trim().parse::<f64>()?,
                    z.trim().parse::<f64>()?,
                ]);
            }

            let detection = RawHandDetection {
                landmarks,
                handedness,
            };

            match frames.last_mut() {
                Some(set) if set.frame_index == frame_index => set.hands.push(detection),
                _ => frames.push(DetectionSet {
                    frame_index,
                    hands: vec![detection],
                }),
            }
        }

        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, idx: usize) -> Option<&DetectionSet> {
        self.frames.get(idx)
    }

    /// Total number of hand detections across all frames.
    pub fn num_detections(&self) -> usize {
        self.frames.iter().map(|f| f.hands.len()).sum()
    }

    /// Turn the session into a frame source for the pipeline.
    pub fn into_source(self) -> ReplaySource {
        ReplaySource {
            frames: self.frames.into_iter(),
        }
    }
}

/// Replays a recorded session frame by frame.
pub struct ReplaySource {
    frames: std::vec::IntoIter<DetectionSet>,
}

impl FrameSource for ReplaySource {
    fn next_detections(&mut self) -> Option<DetectionSet> {
        self.frames.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hand_row(frame: usize, label: &str, n: usize) -> String {
        let coords: Vec<String> = (0..n)
            .flat_map(|i| {
                let base = i as f64 * 0.01;
                vec![
                    format!("{:.3}", base),
                    format!("{:.3}", base + 0.5),
                    "-0.020".to_string(),
                ]
            })
            .collect();
        format!("{frame},{label},{}", coords.join(","))
    }

    #[test]
    fn test_rows_group_by_frame_index() {
        let csv = format!(
            "# recorded session\n{}\n{}\n{}\n",
            hand_row(0, "Right", 21),
            hand_row(0, "Left", 21),
            hand_row(1, "Left", 21),
        );
        let session = RecordedSession::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(session.len(), 2);
        assert_eq!(session.num_detections(), 3);

        let first = session.frame(0).unwrap();
        assert_eq!(first.hands.len(), 2);
        assert_eq!(first.hands[0].handedness, Some(Handedness::CameraRight));
        assert_eq!(first.hands[1].handedness, Some(Handedness::CameraLeft));
        assert_eq!(first.hands[0].landmarks.len(), 21);
        assert_relative_eq!(first.hands[0].landmarks[4][0], 0.04, epsilon = 1e-9);
        assert_relative_eq!(first.hands[0].landmarks[4][1], 0.54, epsilon = 1e-9);
    }

    #[test]
    fn test_short_rows_are_kept_for_the_adapter_to_reject() {
        let csv = hand_row(0, "Right", 19);
        let session = RecordedSession::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(session.num_detections(), 1);
        assert_eq!(session.frame(0).unwrap().hands[0].landmarks.len(), 19);
    }

    #[test]
    fn test_unknown_label_becomes_missing_handedness() {
        let csv = hand_row(3, "Ambidextrous", 21);
        let session = RecordedSession::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(session.frame(0).unwrap().hands[0].handedness, None);
    }

    #[test]
    fn test_replay_source_yields_frames_in_order() {
        let csv = format!("{}\n{}\n", hand_row(0, "Right", 21), hand_row(5, "Left", 21));
        let mut source = RecordedSession::from_reader(csv.as_bytes())
            .unwrap()
            .into_source();

        assert_eq!(source.next_detections().unwrap().frame_index, 0);
        assert_eq!(source.next_detections().unwrap().frame_index, 5);
        assert!(source.next_detections().is_none());
    }
}
