//! Boundary I/O: configuration files and recorded-session replay.

pub mod config;
pub mod recording;

pub use config::{PilotConfig, load_config};
pub use recording::{RecordedSession, ReplaySource};
