//! CLI command implementations.

pub mod init;
pub mod run;
pub mod lattice;
pub mod sweep;

use anyhow::Result;
use metaplast::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::RunOverrides;

/// Load metaplast.toml and apply command-line overrides.
pub(crate) fn resolve_config(overrides: &RunOverrides) -> Result<Config> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, overrides);
    Ok(config)
}

pub(crate) fn apply_overrides(config: &mut Config, overrides: &RunOverrides) {
    if let Some(n) = overrides.trials {
        config.trials.count = n;
    }
    if let Some(pattern) = overrides.pattern {
        config.trials.pattern = pattern;
    }
    if let Some(len) = overrides.block_length {
        config.trials.block_length = len;
    }
    if let Some(seed) = overrides.trial_seed {
        config.trials.seed = seed;
    }
    if let Some(sigma) = overrides.sigma {
        config.model.sigma = sigma;
    }
    if let Some(seed) = overrides.seed {
        config.model.seed = seed;
    }
    if let Some(population) = overrides.population {
        config.model.starting_population = population;
    }
}

/// Build the configured trial sequence.
pub(crate) fn generate_trials(config: &Config) -> Vec<Side> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.trials.seed);
    config
        .trials
        .pattern
        .generate(config.trials.count, config.trials.block_length, &mut rng)
}
