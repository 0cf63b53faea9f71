//! Engine configuration.
//!
//! Uses `serde(default)` so partial configs deserialize with defaults
//! filled in.

use serde::{Deserialize, Serialize};

use hop_common::ConfigError;

use crate::labels::{LabelAlphabet, DEFAULT_LABELS};

/// User-tunable search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Label characters in assignment order. Case matters: lowercase and
    /// uppercase are distinct labels.
    pub labels: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.into(),
        }
    }
}

impl SearchConfig {
    /// Validate the label set and build the alphabet.
    pub fn alphabet(&self) -> Result<LabelAlphabet, ConfigError> {
        LabelAlphabet::new(&self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_the_default_alphabet() {
        let config = SearchConfig::default();
        assert_eq!(config.labels, DEFAULT_LABELS);
        assert_eq!(config.alphabet().unwrap().len(), 52);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.labels, DEFAULT_LABELS);
    }

    #[test]
    fn round_trips_through_json() {
        let config = SearchConfig {
            labels: "asdf".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.labels, "asdf");
    }

    #[test]
    fn invalid_labels_fail_validation() {
        let config = SearchConfig { labels: "aa".into() };
        assert!(matches!(
            config.alphabet(),
            Err(ConfigError::DuplicateLabel('a'))
        ));
    }
}
