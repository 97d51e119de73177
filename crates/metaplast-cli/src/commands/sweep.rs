//! Compare accuracy across decision temperatures.

use anyhow::Result;
use colored::Colorize;
use metaplast::prelude::*;
use tracing::warn;

use super::{generate_trials, resolve_config};
use crate::RunOverrides;

/// Mean accuracy of `repeats` independently seeded runs at one sigma.
pub(crate) fn mean_accuracy(
    model_config: &ModelConfig,
    trials: &[Side],
    repeats: u64,
) -> metaplast::prelude::Result<f64> {
    let runner = TrialRunner::new();
    let mut total = 0.0;
    for r in 0..repeats {
        let config = model_config.clone().with_seed(model_config.seed.wrapping_add(r));
        let mut model = MetaplasticityModel::new(&config)?;
        let log = runner.run(&mut model, trials)?;
        total += RunSummary::from_log(&log).accuracy;
    }
    Ok(if repeats == 0 { 0.0 } else { total / repeats as f64 })
}

pub fn run(sigmas: &[f64], repeats: u64, overrides: &RunOverrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let trials = generate_trials(&config);

    println!(
        "{} Sweeping {} sigma values over {} {:?} trials ({} runs each)",
        "→".blue(),
        sigmas.len().to_string().cyan(),
        trials.len(),
        config.trials.pattern,
        repeats
    );
    println!();
    println!("{}", "  sigma     accuracy".blue().bold());

    for &sigma in sigmas {
        if !sigma.is_finite() || sigma <= 0.0 {
            warn!(sigma, "skipping non-positive sigma");
            println!("  {:<8}  {}", sigma, "skipped".yellow());
            continue;
        }
        let model_config = config.model.clone().with_sigma(sigma);
        let accuracy = mean_accuracy(&model_config, &trials, repeats)?;
        println!("  {:<8}  {}%", sigma, format!("{:.2}", accuracy * 100.0).green());
    }

    Ok(())
}
