//! Hand data model and detector-output adapter.
//!
//! This module defines the canonical per-hand representation consumed by
//! the classifier:
//! - 21 normalized 3D landmarks per hand, fixed anatomical numbering
//! - the camera-image handedness label (mirrored by convention)
//! - the adapter that validates and converts raw detector output

pub mod adapter;
pub mod frame;
pub mod landmarks;
pub mod style;

pub use adapter::{DetectorConfig, LandmarkAdapter, RawHandDetection};
pub use frame::{Handedness, Landmark, LandmarkFrame};
pub use style::HandStyle;
