use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use swerve_foundation::GestureConfig;

/// Contents of a `--config` file.
///
/// ```toml
/// touch = true
///
/// [gesture]
/// intent_deadband = 8.0
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReplayConfig {
    pub gesture: GestureConfig,
    /// Replay through the touch adapter instead of the pointer adapter.
    pub touch: bool,
}

impl ReplayConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(text)?;
        config.gesture = config.gesture.sanitized();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ReplayConfig::parse("[gesture]\nintent_deadband = 12.5\n").expect("valid");
        assert_eq!(config.gesture.intent_deadband, 12.5);
        assert!(config.gesture.contain_propagation);
        assert!(!config.touch);
        assert_eq!(ReplayConfig::parse("").expect("empty"), ReplayConfig::default());
    }

    #[test]
    fn negative_deadband_is_sanitized() {
        let config = ReplayConfig::parse("[gesture]\nintent_deadband = -3.0\n").expect("valid");
        assert_eq!(config.gesture, GestureConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ReplayConfig::parse("touch = maybe").is_err());
    }
}
