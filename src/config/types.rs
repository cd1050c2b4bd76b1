//! Configuration types for the OEE engine.

use serde::{Deserialize, Serialize};

fn default_top_operator_limit() -> usize {
    5
}

fn default_window_days() -> u32 {
    30
}

/// Tunable settings for the aggregation engine.
///
/// Every field has a sensible default so a missing key in the YAML file
/// never fails the load.
///
/// # Example
///
/// ```
/// use shopfloor_oee::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.top_operator_limit, 5);
/// assert_eq!(config.default_window_days, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How many operators the dashboard's talent ranking shows.
    #[serde(default = "default_top_operator_limit")]
    pub top_operator_limit: usize,
    /// The financial-deviation window applied when a caller does not
    /// specify one.
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_operator_limit: default_top_operator_limit(),
            default_window_days: default_window_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: EngineConfig = serde_yaml::from_str("top_operator_limit: 3").unwrap();
        assert_eq!(config.top_operator_limit, 3);
        assert_eq!(config.default_window_days, 30);
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
