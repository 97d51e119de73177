//! Run a trial sequence through a fresh model.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use metaplast::prelude::*;
use tracing::info;

use super::{generate_trials, resolve_config};
use crate::RunOverrides;

pub fn run(overrides: &RunOverrides, json: Option<&str>, trace: bool, verbose: bool) -> Result<()> {
    let config = resolve_config(overrides)?;
    let trials = generate_trials(&config);

    println!(
        "{} Running {} {:?} trials (sigma {}, seed {})...",
        "→".blue(),
        trials.len().to_string().cyan(),
        config.trials.pattern,
        config.model.sigma.to_string().cyan(),
        config.model.seed
    );

    let mut model = MetaplasticityModel::new(&config.model)?;
    let runner = if trace {
        TrialRunner::new().with_trace()
    } else {
        TrialRunner::new()
    };

    let pb = ProgressBar::new(trials.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trials")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );

    let log = runner.run_observed(&mut model, &trials, |_, _| pb.inc(1))?;
    pb.finish_and_clear();

    let summary = RunSummary::from_log(&log);
    info!(accuracy = summary.accuracy, trials = summary.trials, "run complete");

    println!();
    println!(
        "{} {}% correct.",
        "✓".green().bold(),
        summary.accuracy_percent().to_string().green()
    );
    println!(
        "  Guesses: {} left / {} right",
        summary.left_guesses.to_string().cyan(),
        summary.right_guesses.to_string().cyan()
    );
    for side in [Side::Left, Side::Right] {
        println!(
            "  {:<5} strong fraction: {:.3}",
            side.to_string(),
            model.strong_fraction(side)?
        );
    }

    if verbose && config.trials.block_length > 0 {
        let blocks = block_accuracy(&log, config.trials.block_length);
        let rendered: Vec<String> = blocks.iter().map(|a| format!("{:.2}", a)).collect();
        println!("  Block accuracy: {}", rendered.join(" ").dimmed());
    }

    if let Some(path) = json {
        let report = RunReport::new(&config.model, &log, &model)?;
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report: {}", path))?;
        println!("  {} Report written to {}", "✓".green(), path);
    }

    Ok(())
}
