//! Whole-surface configuration, loadable from a YAML file.
//!
//! Every threshold and motion parameter is adjustable without code
//! changes; any field absent from the file keeps its default.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classifier::ClassifierConfig;
use crate::hand::DetectorConfig;
use crate::sim::SimConfig;

/// Top-level configuration of the gesture piloting system.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    pub detector: DetectorConfig,
    pub classifier: ClassifierConfig,
    pub sim: SimConfig,
}

/// Load the configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PilotConfig> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let config = serde_yaml::from_reader(file)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_documented_thresholds() {
        let config = PilotConfig::default();

        assert_relative_eq!(config.classifier.fist_threshold, 0.10);
        assert_relative_eq!(config.classifier.raised_threshold, 0.10);
        assert_relative_eq!(config.classifier.thumb_threshold, 0.10);
        assert_relative_eq!(config.classifier.touch_threshold, 0.08);
        assert_eq!(config.detector.max_hands, 2);
        assert_relative_eq!(config.sim.speed, 0.1);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults_elsewhere() {
        let yaml = "classifier:\n  touch_threshold: 0.05\nsim:\n  circle_radius: 2.0\n";
        let config: PilotConfig = serde_yaml::from_str(yaml).unwrap();

        assert_relative_eq!(config.classifier.touch_threshold, 0.05);
        assert_relative_eq!(config.classifier.fist_threshold, 0.10);
        assert_relative_eq!(config.sim.circle_radius, 2.0);
        assert_relative_eq!(config.sim.circle_speed, 0.05);
    }
}
