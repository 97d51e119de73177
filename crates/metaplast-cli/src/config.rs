//! Configuration management for Metaplast CLI.

use anyhow::{Context, Result};
use metaplast::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "metaplast.toml";

/// Metaplast project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub trials: TrialsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialsConfig {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub pattern: TrialPattern,
    #[serde(default = "default_block_length")]
    pub block_length: usize,
    /// Seed for trial generation, independent of the model's seed.
    #[serde(default = "default_trial_seed")]
    pub seed: u64,
}

// Default value functions
fn default_count() -> usize { 100 }
fn default_block_length() -> usize { 10 }
fn default_trial_seed() -> u64 { 7 }

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            pattern: TrialPattern::default(),
            block_length: default_block_length(),
            seed: default_trial_seed(),
        }
    }
}

impl Config {
    /// Load config from metaplast.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find metaplast.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.model.sigma = 0.25;
        config.model.weights.q = 0.5;
        config.trials.pattern = TrialPattern::Blocked;
        config.save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model, config.model);
        assert_eq!(loaded.trials.pattern, TrialPattern::Blocked);
        assert_eq!(loaded.trials.count, 100);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[model]\nsigma = 0.5\n\n[trials]\npattern = \"left\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model.sigma, 0.5);
        assert_eq!(loaded.model.starting_population, 100);
        assert_eq!(loaded.model.weights, WeightConfig::default());
        assert_eq!(loaded.trials.pattern, TrialPattern::Left);
        assert_eq!(loaded.trials.block_length, 10);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[model]\nsigma = \"sharp\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
