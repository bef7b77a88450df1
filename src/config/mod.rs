use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub max_results: usize,
    pub min_similarity: f64,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            max_results: 5,
            min_similarity: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub max_attempts: usize,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Runtime tunables for the interactive shell. All fields have defaults, so
/// a partial (or absent) config file is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggestions: SuggestionSettings,
    pub prompts: PromptSettings,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let config = Config::default();
        assert_eq!(config.suggestions.max_results, 5);
        assert_eq!(config.suggestions.min_similarity, 0.5);
        assert_eq!(config.prompts.max_attempts, 3);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let config: Config = serde_yaml::from_str("prompts:\n  max_attempts: 5\n").unwrap();
        assert_eq!(config.prompts.max_attempts, 5);
        assert_eq!(config.suggestions.max_results, 5);
    }
}
